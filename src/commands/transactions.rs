// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::models::{Kind, Transaction};
use crate::service::TransactionService;
use crate::utils::{fmt_amount, maybe_print_json, pretty_table};

pub fn add(service: &TransactionService<'_>, sub: &clap::ArgMatches) -> Result<Transaction> {
    let category = sub
        .get_one::<String>("category")
        .map(String::as_str)
        .unwrap_or_default();
    let amount = sub
        .get_one::<String>("amount")
        .map(String::as_str)
        .unwrap_or_default();
    let kind = sub.get_one::<Kind>("kind").copied().unwrap_or(Kind::Expense);

    let tx = service.record_transaction(category, amount, kind)?;
    println!(
        "Recorded {} {} in '{}' (id {})",
        tx.kind,
        fmt_amount(tx.amount),
        tx.category,
        tx.id
    );
    Ok(tx)
}

pub fn list(service: &TransactionService<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let data = service.all_transactions()?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        println!("{}", pretty_table(&["ID", "Category", "Amount", "Type"], table_rows(&data)));
    }
    Ok(())
}

pub fn table_rows(data: &[Transaction]) -> Vec<Vec<String>> {
    data.iter()
        .map(|t| {
            vec![
                t.id.to_string(),
                t.category.clone(),
                fmt_amount(t.amount),
                t.kind.to_string(),
            ]
        })
        .collect()
}
