//! Bank shapes.

use serde::{Deserialize, Serialize};

use crate::validate::{self, Validate, ValidationErrors};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BankCreate {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl Validate for BankCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        validate::require("name", &self.name, &mut errors);
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BankUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

impl Validate for BankUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Some(name) = &self.name {
            validate::require("name", name, &mut errors);
        }
        errors.into_result()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BankRead {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}
