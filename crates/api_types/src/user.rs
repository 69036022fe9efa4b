//! User shapes.

use serde::{Deserialize, Serialize};

use crate::enums::UserRole;
use crate::validate::{self, Validate, ValidationErrors};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub surname1: String,
    pub surname2: Option<String>,
    /// Spanish national id, unique across all users.
    pub dni: String,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub password: String,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub role: Option<UserRole>,
}

impl Validate for UserCreate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        validate::require("name", &self.name, &mut errors);
        validate::require("surname1", &self.surname1, &mut errors);
        validate::dni("dni", &self.dni, &mut errors);
        if let Some(email) = &self.email {
            validate::email("email", email, &mut errors);
        }
        validate::password("password", &self.password, &mut errors);
        errors.into_result()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub surname1: Option<String>,
    pub surname2: Option<String>,
    pub dni: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub password: Option<String>,
    pub active: Option<bool>,
    pub role: Option<UserRole>,
}

impl Validate for UserUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        if let Some(name) = &self.name {
            validate::require("name", name, &mut errors);
        }
        if let Some(surname1) = &self.surname1 {
            validate::require("surname1", surname1, &mut errors);
        }
        if let Some(dni) = &self.dni {
            validate::dni("dni", dni, &mut errors);
        }
        if let Some(email) = &self.email {
            validate::email("email", email, &mut errors);
        }
        if let Some(password) = &self.password {
            validate::password("password", password, &mut errors);
        }
        errors.into_result()
    }
}

/// Stored user as returned to clients. The password hash never leaves
/// the service layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRead {
    pub id: i32,
    pub name: String,
    pub surname1: String,
    pub surname2: Option<String>,
    pub dni: String,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub active: bool,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create() -> UserCreate {
        UserCreate {
            name: "Ana".to_string(),
            surname1: "García".to_string(),
            surname2: None,
            dni: "12345678Z".to_string(),
            email: Some("ana@example.com".to_string()),
            telephone: None,
            password: "Str0ng!pass".to_string(),
            active: None,
            role: None,
        }
    }

    #[test]
    fn valid_create_passes() {
        assert!(create().validate().is_ok());
    }

    #[test]
    fn bad_dni_and_empty_name_are_both_reported() {
        let mut data = create();
        data.name = String::new();
        data.dni = "12345678A".to_string();
        let errors = data.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 2);
    }

    #[test]
    fn update_only_checks_present_fields() {
        let update = UserUpdate {
            active: Some(false),
            ..UserUpdate::default()
        };
        assert!(update.validate().is_ok());

        let update = UserUpdate {
            dni: Some("bad".to_string()),
            ..UserUpdate::default()
        };
        assert!(update.validate().is_err());
    }
}
