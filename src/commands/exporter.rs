// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use crate::service::TransactionService;

pub fn handle(service: &TransactionService<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub
        .get_one::<String>("format")
        .map(|s| s.to_lowercase())
        .unwrap_or_default();
    let out = sub.get_one::<String>("out").cloned().unwrap_or_default();

    // Fail before touching the output path
    if !matches!(fmt.as_str(), "csv" | "json") {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let rows = service.all_transactions()?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)?;
            wtr.write_record(["id", "category", "amount", "kind"])?;
            for t in &rows {
                wtr.write_record([
                    t.id.to_string(),
                    t.category.clone(),
                    t.amount.to_string(),
                    t.kind.to_string(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            std::fs::write(&out, serde_json::to_string_pretty(&rows)?)?;
        }
    }
    tracing::info!(count = rows.len(), format = %fmt, "exported transactions");
    println!("Exported {} transactions to {}", rows.len(), out);
    Ok(())
}
