//! Expense shapes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::Currency;
use crate::validate::{self, Validate, ValidationErrors};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ExpenseCreate {
    pub name: String,
    pub description: Option<String>,
    /// Strictly positive; the sign is implied by the entity kind.
    pub amount: f64,
    pub date: NaiveDate,
    pub currency: Currency,
    pub user_id: i32,
    pub source_id: i32,
    pub category_id: i32,
    /// Optional: cash expenses have no account.
    pub account_id: Option<i32>,
}

impl Validate for ExpenseCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        validate::require("name", &self.name, &mut errors);
        validate::positive("amount", self.amount, &mut errors);
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExpenseUpdate {
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

impl Validate for ExpenseUpdate {
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
pub struct ExpenseRead {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_amount_is_rejected_purely() {
        let data = ExpenseCreate {
            name: "Lunch".to_string(),
            description: None,
            amount: 0.0,
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            currency: Currency::Euro,
            user_id: 1,
            source_id: 1,
            category_id: 1,
            account_id: None,
        };
        let errors = data.validate().unwrap_err();
        assert_eq!(errors.errors[0].field, "amount");
    }
}
