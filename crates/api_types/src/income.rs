//! Income shapes. Same layout as expenses, against the income category
//! table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::Currency;
use crate::validate::{self, Validate, ValidationErrors};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IncomeCreate {
    pub name: String,
    pub description: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    pub currency: Currency,
    pub user_id: i32,
    pub source_id: i32,
    pub category_id: i32,
    pub account_id: Option<i32>,
}

impl Validate for IncomeCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        validate::require("name", &self.name, &mut errors);
        validate::positive("amount", self.amount, &mut errors);
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct IncomeUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<NaiveDate>,
    pub currency: Option<Currency>,
    pub user_id: Option<i32>,
    pub source_id: Option<i32>,
    pub category_id: Option<i32>,
    pub account_id: Option<i32>,
}

impl Validate for IncomeUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Some(name) = &self.name {
            validate::require("name", name, &mut errors);
        }
        if let Some(amount) = self.amount {
            validate::positive("amount", amount, &mut errors);
        }
        errors.into_result()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IncomeRead {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub amount: f64,
    pub date: NaiveDate,
    pub currency: Currency,
    pub user_id: i32,
    pub source_id: i32,
    pub category_id: i32,
    pub account_id: Option<i32>,
}
