//! Household and household-member shapes.

use serde::{Deserialize, Serialize};

use crate::enums::HouseholdRole;
use crate::validate::{self, Validate, ValidationErrors};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HouseholdCreate {
    pub name: String,
    pub address: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

impl Validate for HouseholdCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        validate::require("name", &self.name, &mut errors);
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HouseholdUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub active: Option<bool>,
}

impl Validate for HouseholdUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Some(name) = &self.name {
            validate::require("name", name, &mut errors);
        }
        errors.into_result()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HouseholdRead {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HouseholdMemberCreate {
    pub role: HouseholdRole,
    #[serde(default)]
    pub active: Option<bool>,
    pub household_id: i32,
    pub user_id: i32,
}

impl Validate for HouseholdMemberCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        // Role membership is enforced by deserialization; the household
        // and user references are checked by the FK protocol.
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HouseholdMemberUpdate {
    pub role: Option<HouseholdRole>,
    pub active: Option<bool>,
}

impl Validate for HouseholdMemberUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HouseholdMemberRead {
    pub id: i32,
    pub role: HouseholdRole,
    pub active: bool,
    pub household_id: i32,
    pub user_id: i32,
}
