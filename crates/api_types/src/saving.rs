//! Saving and saving-log shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::Currency;
use crate::validate::{Validate, ValidationErrors};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavingCreate {
    pub description: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    pub currency: Currency,
    pub user_id: i32,
    /// Required: a saving always sits in an account.
    pub account_id: i32,
}

impl Validate for SavingCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SavingUpdate {
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub currency: Option<Currency>,
    pub user_id: Option<i32>,
    pub account_id: Option<i32>,
}

impl Validate for SavingUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavingRead {
    pub id: i32,
    pub description: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    pub currency: Currency,
    pub user_id: i32,
    pub account_id: i32,
}

/// Append-only ledger entry for a saving.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavingLogCreate {
    pub date: NaiveDate,
    pub amount: f64,
    pub total_amount: Option<f64>,
    pub note: Option<String>,
    pub saving_id: i32,
    pub source_id: i32,
}

impl Validate for SavingLogCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SavingLogUpdate {
    pub date: Option<NaiveDate>,
    pub amount: Option<f64>,
    pub total_amount: Option<f64>,
    pub note: Option<String>,
}

impl Validate for SavingLogUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavingLogRead {
    pub id: i32,
    pub date: NaiveDate,
    pub amount: f64,
    pub total_amount: Option<f64>,
    pub note: Option<String>,
    pub saving_id: i32,
    pub source_id: i32,
}
