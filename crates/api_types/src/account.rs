//! Bank account shapes.

use serde::{Deserialize, Serialize};

use crate::validate::{self, Validate, ValidationErrors};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AccountCreate {
    pub name: String,
    pub description: Option<String>,
    pub iban: String,
    /// Opening balance; mutated afterwards only by domain logic outside
    /// this API (never by plain CRUD writes from clients).
    pub balance: f64,
    #[serde(default)]
    pub active: Option<bool>,
    pub user_id: i32,
    pub bank_id: i32,
}

impl Validate for AccountCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        validate::require("name", &self.name, &mut errors);
        validate::iban("iban", &self.iban, &mut errors);
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub iban: Option<String>,
    pub balance: Option<f64>,
    pub active: Option<bool>,
}

impl Validate for AccountUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Some(name) = &self.name {
            validate::require("name", name, &mut errors);
        }
        if let Some(iban) = &self.iban {
            validate::iban("iban", iban, &mut errors);
        }
        errors.into_result()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccountRead {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub iban: String,
    pub balance: f64,
    pub active: bool,
    pub user_id: i32,
    pub bank_id: i32,
}
