//! Financial summary shapes. A summary is a derived snapshot produced
//! elsewhere; this API only stores and serves it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validate::{Validate, ValidationErrors};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FinancialSummaryCreate {
    pub date: NaiveDate,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub total_investments: f64,
    pub net_worth: f64,
    pub user_id: i32,
    pub household_id: i32,
}

impl Validate for FinancialSummaryCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FinancialSummaryUpdate {
    pub date: Option<NaiveDate>,
    pub total_income: Option<f64>,
    pub total_expenses: Option<f64>,
    pub total_savings: Option<f64>,
    pub total_investments: Option<f64>,
    pub net_worth: Option<f64>,
}

impl Validate for FinancialSummaryUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummaryRead {
    pub id: i32,
    pub date: NaiveDate,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub total_investments: f64,
    pub net_worth: f64,
    pub user_id: i32,
    pub household_id: i32,
}
