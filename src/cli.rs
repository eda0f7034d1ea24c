// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, value_parser};
use std::path::PathBuf;

use crate::models::Kind;

fn kind_arg(default: &'static str) -> Arg {
    arg!(--kind <KIND> "income or expense")
        .value_parser(|s: &str| s.parse::<Kind>())
        .default_value(default)
}

fn json_args(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print as pretty JSON").conflicts_with("jsonl"))
        .arg(arg!(--jsonl "Print one JSON object per line"))
}

pub fn build_cli() -> Command {
    Command::new("finledger")
        .version(clap::crate_version!())
        .about("Record income and expenses, and chart where the money goes")
        .arg(
            arg!(--db <PATH> "Ledger database file")
                .env("FINLEDGER_DB")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .global(true)
                .help("Log more (-v info, -vv debug)"),
        )
        .subcommand(Command::new("init").about("Create the ledger if it does not exist"))
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(
                    arg!(--category <CATEGORY> "Category label")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(
                    arg!(--amount <AMOUNT> "Amount, greater than zero")
                        .required(true)
                        .allow_hyphen_values(true),
                )
                .arg(kind_arg("expense")),
        )
        .subcommand(json_args(
            Command::new("list").about("Show every recorded transaction"),
        ))
        .subcommand(json_args(
            Command::new("report")
                .about("Totals per category")
                .arg(kind_arg("expense")),
        ))
        .subcommand(
            Command::new("chart")
                .about("Write the expense pie chart as an HTML page")
                .arg(
                    arg!(--out <FILE> "Output file")
                        .value_parser(value_parser!(PathBuf))
                        .default_value("expenses.html"),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export all transactions")
                .arg(arg!(--format <FORMAT> "csv|json").required(true))
                .arg(arg!(--out <FILE> "Output file").required(true)),
        )
}
