// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Context;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{params, Connection, Row};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::{CategoryTotal, Kind, Transaction};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Finledger", "finledger"));

/// Default location of the ledger file, creating its directory if needed.
pub fn db_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("finledger.sqlite"))
}

/// Append-only transaction log backed by a single SQLite connection.
///
/// The connection lives as long as the `Store`; dropping it (or calling
/// [`Store::close`]) releases the database handle.
#[derive(Debug)]
pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "opening ledger");
        let store = Store {
            conn: Connection::open(path)?,
        };
        store.initialize()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let store = Store {
            conn: Connection::open_in_memory()?,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Creates the transactions table if it is missing. Safe to call any
    /// number of times; existing rows are left alone.
    pub fn initialize(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
        CREATE TABLE IF NOT EXISTS transactions(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category TEXT NOT NULL,
            amount REAL NOT NULL,
            type TEXT NOT NULL CHECK(type IN ('income','expense'))
        );
        "#,
        )?;
        Ok(())
    }

    /// Inserts a record. Callers are expected to have validated the fields.
    pub fn append(&self, category: &str, amount: f64, kind: Kind) -> Result<Transaction> {
        self.conn.execute(
            "INSERT INTO transactions(category, amount, type) VALUES (?1, ?2, ?3)",
            params![category, amount, kind],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(id, category, amount, %kind, "appended transaction");
        Ok(Transaction {
            id,
            category: category.to_string(),
            amount,
            kind,
        })
    }

    /// Every stored record in insertion order.
    pub fn list_all(&self) -> Result<Vec<Transaction>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, category, amount, type FROM transactions ORDER BY id")?;
        let rows = stmt.query_map([], map_transaction)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Sum of amounts per category for one kind. Categories without any
    /// matching record do not appear.
    ///
    /// SQLite yields NULL when a float sum overflows; that surfaces as
    /// [`Error::TotalOverflow`] for the offending category.
    pub fn sum_by_category(&self, kind: Kind) -> Result<Vec<CategoryTotal>> {
        let mut stmt = self.conn.prepare(
            "SELECT category, SUM(amount) AS total
             FROM transactions
             WHERE type=?1
             GROUP BY category
             ORDER BY total DESC, category",
        )?;
        let rows = stmt.query_map(params![kind], |r| {
            Ok((r.get::<_, String>(0)?, r.get::<_, Option<f64>>(1)?))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (category, total) = row?;
            match total {
                Some(total) if total.is_finite() => out.push(CategoryTotal { category, total }),
                _ => return Err(Error::TotalOverflow(category)),
            }
        }
        Ok(out)
    }

    pub fn count(&self) -> Result<i64> {
        let n = self
            .conn
            .query_row("SELECT COUNT(*) FROM transactions", [], |r| r.get(0))?;
        Ok(n)
    }

    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        tracing::debug!("ledger closed");
        Ok(())
    }
}

fn map_transaction(r: &Row<'_>) -> rusqlite::Result<Transaction> {
    Ok(Transaction {
        id: r.get(0)?,
        category: r.get(1)?,
        amount: r.get(2)?,
        kind: r.get(3)?,
    })
}
