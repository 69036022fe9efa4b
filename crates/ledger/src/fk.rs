//! Foreign-key validation protocol.
//!
//! Field-shape validation is pure and lives in `api_types`; checking
//! that a referenced id actually exists requires a storage read and is
//! deliberately isolated here so the service invokes it explicitly;
//! validation shapes never see a database handle.
//!
//! Checks run in the fixed order the descriptor lists them and stop at
//! the first failure: when several keys are invalid only the
//! first-checked field is reported.

use sea_orm::DatabaseConnection;

use crate::error::LedgerError;
use crate::repository::Repository;
use crate::{
    accounts, banks, expense_categories, households, income_categories, investment_categories,
    investments, savings, sources, users,
};

/// Table a foreign key points at. Resolves the reference through the
/// referenced entity's repository.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FkTarget {
    User,
    Household,
    Bank,
    Account,
    Source,
    ExpensesCategory,
    IncomesCategory,
    InvestmentsCategory,
    Saving,
    Investment,
}

impl FkTarget {
    pub async fn exists(self, db: &DatabaseConnection, id: i32) -> Result<bool, LedgerError> {
        match self {
            FkTarget::User => Repository::<users::Descriptor>::new(db.clone()).exists(id).await,
            FkTarget::Household => {
                Repository::<households::Descriptor>::new(db.clone())
                    .exists(id)
                    .await
            }
            FkTarget::Bank => Repository::<banks::Descriptor>::new(db.clone()).exists(id).await,
            FkTarget::Account => {
                Repository::<accounts::Descriptor>::new(db.clone())
                    .exists(id)
                    .await
            }
            FkTarget::Source => {
                Repository::<sources::Descriptor>::new(db.clone())
                    .exists(id)
                    .await
            }
            FkTarget::ExpensesCategory => {
                Repository::<expense_categories::Descriptor>::new(db.clone())
                    .exists(id)
                    .await
            }
            FkTarget::IncomesCategory => {
                Repository::<income_categories::Descriptor>::new(db.clone())
                    .exists(id)
                    .await
            }
            FkTarget::InvestmentsCategory => {
                Repository::<investment_categories::Descriptor>::new(db.clone())
                    .exists(id)
                    .await
            }
            FkTarget::Saving => {
                Repository::<savings::Descriptor>::new(db.clone())
                    .exists(id)
                    .await
            }
            FkTarget::Investment => {
                Repository::<investments::Descriptor>::new(db.clone())
                    .exists(id)
                    .await
            }
        }
    }
}

/// One foreign key of a create payload.
#[derive(Clone, Copy, Debug)]
pub struct FkCheck {
    /// Payload field holding the reference.
    pub field: &'static str,
    /// Code reported when the reference is dangling.
    pub code: &'static str,
    pub target: FkTarget,
    /// `None` for an optional key that was not supplied: always valid.
    pub id: Option<i32>,
}

impl FkCheck {
    pub fn required(field: &'static str, code: &'static str, target: FkTarget, id: i32) -> Self {
        Self {
            field,
            code,
            target,
            id: Some(id),
        }
    }

    pub fn optional(
        field: &'static str,
        code: &'static str,
        target: FkTarget,
        id: Option<i32>,
    ) -> Self {
        Self {
            field,
            code,
            target,
            id,
        }
    }
}

/// Walk the checks in order; fail on the first dangling reference.
pub async fn validate_foreign_keys(
    db: &DatabaseConnection,
    checks: Vec<FkCheck>,
) -> Result<(), LedgerError> {
    for check in checks {
        let Some(id) = check.id else {
            continue;
        };
        if !check.target.exists(db, id).await? {
            return Err(LedgerError::ForeignKey {
                field: check.field,
                code: check.code,
            });
        }
    }
    Ok(())
}
