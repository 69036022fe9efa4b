//! Investment and investment-log shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::{Currency, InvestmentAction};
use crate::validate::{Validate, ValidationErrors};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InvestmentCreate {
    pub name: Option<String>,
    pub date: NaiveDate,
    pub currency: Currency,
    pub user_id: i32,
    pub account_id: i32,
    pub category_id: i32,
}

impl Validate for InvestmentCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InvestmentUpdate {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub currency: Option<Currency>,
    pub user_id: Option<i32>,
    pub account_id: Option<i32>,
    pub category_id: Option<i32>,
}

impl Validate for InvestmentUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRead {
    pub id: i32,
    pub name: Option<String>,
    pub date: NaiveDate,
    pub currency: Currency,
    pub user_id: i32,
    pub account_id: i32,
    pub category_id: i32,
}

/// Append-only ledger entry for an investment position.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InvestmentLogCreate {
    pub date: NaiveDate,
    pub current_value: f64,
    pub price_per_unit: Option<f64>,
    pub units_bought: Option<f64>,
    pub action: InvestmentAction,
    pub note: Option<String>,
    pub investment_id: i32,
}

impl Validate for InvestmentLogCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InvestmentLogUpdate {
    pub date: Option<NaiveDate>,
    pub current_value: Option<f64>,
    pub price_per_unit: Option<f64>,
    pub units_bought: Option<f64>,
    pub action: Option<InvestmentAction>,
    pub note: Option<String>,
}

impl Validate for InvestmentLogUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvestmentLogRead {
    pub id: i32,
    pub date: NaiveDate,
    pub current_value: f64,
    pub price_per_unit: Option<f64>,
    pub units_bought: Option<f64>,
    pub action: InvestmentAction,
    pub note: Option<String>,
    pub investment_id: i32,
}
