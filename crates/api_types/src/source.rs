//! Money source shapes (payroll, broker, shop, ...).

use serde::{Deserialize, Serialize};

use crate::enums::SourceKind;
use crate::validate::{self, Validate, ValidationErrors};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceCreate {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub kind: Option<SourceKind>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl Validate for SourceCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        validate::require("name", &self.name, &mut errors);
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SourceUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub kind: Option<SourceKind>,
    pub active: Option<bool>,
}

impl Validate for SourceUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Some(name) = &self.name {
            validate::require("name", name, &mut errors);
        }
        errors.into_result()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceRead {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub kind: SourceKind,
    pub active: bool,
}
