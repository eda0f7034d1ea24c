// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::Path;

use crate::db::Store;

pub fn handle(store: &Store, path: &Path) -> Result<()> {
    let n = store.count()?;
    println!(
        "Ledger ready at {} ({} transaction{})",
        path.display(),
        n,
        if n == 1 { "" } else { "s" }
    );
    Ok(())
}
