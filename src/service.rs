// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::db::Store;
use crate::error::{Error, Result};
use crate::models::{CategoryTotal, Kind, Transaction};

/// Checks raw user input before it reaches the [`Store`] and shapes reports
/// for display. Holds no state of its own.
pub struct TransactionService<'a> {
    store: &'a Store,
}

impl<'a> TransactionService<'a> {
    pub fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// Validates and records one transaction.
    ///
    /// The amount is validated before the category, so input that is wrong
    /// in both ways reports [`Error::InvalidAmount`]. Nothing is written
    /// unless both checks pass.
    pub fn record_transaction(
        &self,
        raw_category: &str,
        raw_amount: &str,
        kind: Kind,
    ) -> Result<Transaction> {
        let amount = parse_amount(raw_amount).inspect_err(|e| {
            tracing::warn!(raw_amount, "rejected transaction: {e}");
        })?;
        let category = raw_category.trim();
        if category.is_empty() {
            tracing::warn!("rejected transaction: empty category");
            return Err(Error::InvalidCategory);
        }
        let tx = self.store.append(category, amount, kind)?;
        tracing::info!(id = tx.id, category, amount, %kind, "recorded transaction");
        Ok(tx)
    }

    /// Expense totals per category, for charting.
    pub fn expense_report(&self) -> Result<Vec<CategoryTotal>> {
        self.report(Kind::Expense)
    }

    pub fn income_report(&self) -> Result<Vec<CategoryTotal>> {
        self.report(Kind::Income)
    }

    pub fn report(&self, kind: Kind) -> Result<Vec<CategoryTotal>> {
        let totals = self.store.sum_by_category(kind)?;
        if totals.is_empty() {
            return Err(Error::NoData(kind));
        }
        tracing::debug!(%kind, categories = totals.len(), "built category report");
        Ok(totals)
    }

    pub fn all_transactions(&self) -> Result<Vec<Transaction>> {
        self.store.list_all()
    }
}

/// Largest amount a single transaction may carry. Keeps per-category sums
/// well inside `f64` range.
pub const MAX_AMOUNT: f64 = 1e12;

/// Parses a user-typed amount, which must be a finite number above zero
/// and no larger than [`MAX_AMOUNT`].
pub fn parse_amount(raw: &str) -> Result<f64> {
    let s = raw.trim();
    let amount = s
        .parse::<f64>()
        .map_err(|_| Error::InvalidAmount(format!("'{}' is not a number", s)))?;
    if !amount.is_finite() {
        return Err(Error::InvalidAmount(format!("'{}' is not a finite number", s)));
    }
    if amount <= 0.0 {
        return Err(Error::InvalidAmount(format!(
            "{} must be greater than zero",
            amount
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(Error::InvalidAmount(format!(
            "{} exceeds the maximum of {}",
            s, MAX_AMOUNT
        )));
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_positive_numbers() {
        assert_eq!(parse_amount("3.50").unwrap(), 3.5);
        assert_eq!(parse_amount("  12 ").unwrap(), 12.0);
        assert_eq!(parse_amount("1e2").unwrap(), 100.0);
        assert_eq!(parse_amount("1000000000000").unwrap(), MAX_AMOUNT);
    }

    #[test]
    fn parse_amount_rejects_bad_input() {
        for raw in ["", "abc", "0", "-2", "-0.0", "NaN", "inf", "1,50", "1e308", "1000000000000.01"] {
            assert!(
                matches!(parse_amount(raw), Err(Error::InvalidAmount(_))),
                "expected '{}' to be rejected",
                raw
            );
        }
    }
}
