// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use finledger::db::{self, Store};
use finledger::service::TransactionService;
use finledger::{cli, commands, logging};

fn main() -> ExitCode {
    let matches = cli::build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {e:?}");
            eprintln!("error: {:#}", e);
            ExitCode::from(finledger::error::exit_code(&e))
        }
    }
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let path = match matches.get_one::<PathBuf>("db") {
        Some(p) => p.clone(),
        None => db::db_path()?,
    };
    let store =
        Store::open(&path).with_context(|| format!("Open ledger at {}", path.display()))?;

    // The store is dropped (and the connection released) on the error path too
    dispatch(&store, &path, matches)?;
    store.close().context("Close ledger")?;
    Ok(())
}

fn dispatch(store: &Store, path: &Path, matches: &clap::ArgMatches) -> Result<()> {
    let service = TransactionService::new(store);
    match matches.subcommand() {
        Some(("init", _)) => commands::init::handle(store, path)?,
        Some(("add", sub)) => {
            commands::transactions::add(&service, sub)?;
        }
        Some(("list", sub)) => commands::transactions::list(&service, sub)?,
        Some(("report", sub)) => commands::reports::report(&service, sub)?,
        Some(("chart", sub)) => {
            commands::reports::chart(&service, sub)?;
        }
        Some(("export", sub)) => commands::exporter::handle(&service, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
