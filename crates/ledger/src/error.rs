//! The module contains the errors the ledger core can raise.
//!
//! Shape validation failures never reach this crate (they are pure and
//! caught at the HTTP boundary); everything here involves storage:
//!
//! - [`ForeignKey`] a referenced entity id does not exist.
//! - [`Conflict`] a uniqueness invariant was violated.
//! - [`Database`] the storage layer itself failed.
//!
//! [`ForeignKey`]: LedgerError::ForeignKey
//! [`Conflict`]: LedgerError::Conflict
//! [`Database`]: LedgerError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Ledger custom errors.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// First failing foreign key of a create, with the offending field
    /// and its `<FIELD>_NOT_FOUND` code.
    #[error("{field}: {code}")]
    ForeignKey {
        field: &'static str,
        code: &'static str,
    },
    #[error("{0}")]
    Conflict(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::ForeignKey { field: a, code: b },
                Self::ForeignKey { field: c, code: d },
            ) => a == c && b == d,
            (Self::Conflict(a), Self::Conflict(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
