// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::chart;
use crate::models::Kind;
use crate::service::TransactionService;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn report(service: &TransactionService<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let kind = sub.get_one::<Kind>("kind").copied().unwrap_or(Kind::Expense);
    let totals = service.report(kind)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        let rows: Vec<Vec<String>> = totals
            .iter()
            .map(|t| vec![t.category.clone(), fmt_amount(t.total)])
            .collect();
        let hdr = match kind {
            Kind::Expense => "Spent",
            Kind::Income => "Earned",
        };
        println!("{}", pretty_table(&["Category", hdr], rows));
    }
    Ok(())
}

pub fn chart(service: &TransactionService<'_>, sub: &clap::ArgMatches) -> Result<PathBuf> {
    let out = sub
        .get_one::<PathBuf>("out")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("expenses.html"));
    let totals = service.expense_report()?;
    chart::write_html(&out, &totals)
        .with_context(|| format!("Write chart to {}", out.display()))?;
    println!("Wrote expense chart to {}", out.display());
    Ok(out)
}
