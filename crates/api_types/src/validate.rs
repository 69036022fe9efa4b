//! Pure field-level validation for the wire shapes.
//!
//! Nothing in this module touches storage: referential checks live in
//! the ledger crate's foreign-key protocol. Validators collect every
//! failing field instead of stopping at the first one, so a caller can
//! fix a whole payload in one round trip.

use thiserror::Error;

/// A single failing field with a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// All field errors collected while validating one shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", .errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when no field failed, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

/// Structural contract every Create/Update shape implements.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Check letter table for Spanish DNI numbers, indexed by number mod 23.
const DNI_LETTERS: &[u8] = b"TRWAGMYFPDXBNJZSQVHLCKE";

pub fn require(field: &'static str, value: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.push(field, "must not be empty");
    }
}

pub fn positive(field: &'static str, value: f64, errors: &mut ValidationErrors) {
    if !(value > 0.0) {
        errors.push(field, "must be a positive amount");
    }
}

/// DNI format: 8 digits followed by the correct check letter.
pub fn dni(field: &'static str, value: &str, errors: &mut ValidationErrors) {
    let bytes = value.as_bytes();
    if bytes.len() != 9 || !bytes[..8].iter().all(u8::is_ascii_digit) {
        errors.push(field, "must be 8 digits followed by a letter (e.g. 12345678Z)");
        return;
    }
    // The slice is all ASCII digits, so the parse cannot fail.
    let Ok(number) = value[..8].parse::<u32>() else {
        errors.push(field, "must start with 8 digits");
        return;
    };
    let expected = DNI_LETTERS[(number % 23) as usize];
    if bytes[8] != expected {
        errors.push(
            field,
            format!("invalid check letter, expected {}", expected as char),
        );
    }
}

/// Password policy: at least 8 chars with upper, lower, digit and symbol.
pub fn password(field: &'static str, value: &str, errors: &mut ValidationErrors) {
    if value.len() < 8 {
        errors.push(field, "must be at least 8 characters long");
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(field, "must contain an uppercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(field, "must contain a lowercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        errors.push(field, "must contain a digit");
    }
    if !value.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace()) {
        errors.push(field, "must contain a symbol");
    }
}

/// IBAN shape only: country code, two check digits, 11-30
/// alphanumerics. No mod-97 verification.
pub fn iban(field: &'static str, value: &str, errors: &mut ValidationErrors) {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() >= 15
        && bytes.len() <= 34
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..4].iter().all(u8::is_ascii_digit)
        && bytes[4..].iter().all(u8::is_ascii_alphanumeric);
    if !well_formed {
        errors.push(field, "must be a well-formed IBAN (e.g. ES0912345678901234567890)");
    }
}

/// Minimal structural email check: `local@domain` with a dotted domain.
pub fn email(field: &'static str, value: &str, errors: &mut ValidationErrors) {
    let ok = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !ok {
        errors.push(field, "must be a valid email address");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_of(f: impl FnOnce(&mut ValidationErrors)) -> ValidationErrors {
        let mut errors = ValidationErrors::default();
        f(&mut errors);
        errors
    }

    #[test]
    fn dni_accepts_valid_check_letter() {
        assert!(errors_of(|e| dni("dni", "12345678Z", e)).is_empty());
    }

    #[test]
    fn dni_rejects_wrong_check_letter() {
        let errors = errors_of(|e| dni("dni", "12345678A", e));
        assert_eq!(errors.errors.len(), 1);
        assert!(errors.errors[0].message.contains("expected Z"));
    }

    #[test]
    fn dni_rejects_malformed_input() {
        assert!(!errors_of(|e| dni("dni", "1234Z", e)).is_empty());
        assert!(!errors_of(|e| dni("dni", "ABCDEFGHZ", e)).is_empty());
    }

    #[test]
    fn password_reports_every_missing_class() {
        let errors = errors_of(|e| password("password", "abc", e));
        // Too short, no uppercase, no digit, no symbol.
        assert_eq!(errors.errors.len(), 4);
        assert!(errors_of(|e| password("password", "Str0ng!pass", e)).is_empty());
    }

    #[test]
    fn iban_shape_check() {
        assert!(errors_of(|e| iban("iban", "ES0912345678901234567890", e)).is_empty());
        assert!(!errors_of(|e| iban("iban", "12345", e)).is_empty());
        assert!(!errors_of(|e| iban("iban", "es0912345678901234567890", e)).is_empty());
    }

    #[test]
    fn email_structural_check() {
        assert!(errors_of(|e| email("email", "ana@example.com", e)).is_empty());
        assert!(!errors_of(|e| email("email", "ana@", e)).is_empty());
        assert!(!errors_of(|e| email("email", "example.com", e)).is_empty());
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        assert!(!errors_of(|e| positive("amount", 0.0, e)).is_empty());
        assert!(!errors_of(|e| positive("amount", -3.5, e)).is_empty());
        assert!(errors_of(|e| positive("amount", 0.01, e)).is_empty());
    }

    #[test]
    fn display_joins_all_errors() {
        let mut errors = ValidationErrors::default();
        errors.push("name", "must not be empty");
        errors.push("amount", "must be a positive amount");
        assert_eq!(
            errors.to_string(),
            "name: must not be empty; amount: must be a positive amount"
        );
    }
}
