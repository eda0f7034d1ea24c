// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Kind;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The amount was not a number, or was not strictly positive.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The category was empty once surrounding whitespace was removed.
    #[error("category must not be empty")]
    InvalidCategory,

    /// A report was requested but there is nothing recorded of that kind.
    #[error("no {0} transactions recorded yet")]
    NoData(Kind),

    /// The running total for a category no longer fits in a float.
    #[error("total for category '{0}' is too large to report")]
    TotalOverflow(String),

    #[error("storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("chart error: {0}")]
    Chart(String),
}

impl Error {
    /// Errors caused by what the user typed or asked for, as opposed to
    /// failures of the database or filesystem.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidAmount(_) | Error::InvalidCategory | Error::NoData(_)
        )
    }
}

/// Process exit status for a failed command: 2 for problems with what the
/// user asked for, 1 for everything else.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(e) if e.is_user_error() => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn user_errors_exit_with_two() {
        let err = anyhow::Error::from(Error::InvalidAmount("'x' is not a number".into()));
        assert_eq!(exit_code(&err), 2);

        let wrapped: anyhow::Result<()> =
            Err(Error::NoData(Kind::Expense)).context("Build expense report");
        assert_eq!(exit_code(&wrapped.unwrap_err()), 2);
    }

    #[test]
    fn infrastructure_errors_exit_with_one() {
        let err = anyhow::Error::from(Error::Storage(rusqlite::Error::InvalidQuery));
        assert_eq!(exit_code(&err), 1);

        let wrapped: anyhow::Result<()> =
            Err(Error::TotalOverflow("big".into())).context("Build expense report");
        assert_eq!(exit_code(&wrapped.unwrap_err()), 1);

        assert_eq!(exit_code(&anyhow::anyhow!("disk on fire")), 1);
    }
}
