//! HTTP surface of the ledger.
//!
//! One generic handler set serves every entity; [`server::router`]
//! instantiates it per descriptor. This module owns the error-to-wire
//! mapping: every failure leaves as an [`Envelope`] whose `response`
//! is a machine code and whose `details` carries whatever a caller can
//! act on. Raw storage errors never reach the wire.
//!
//! [`Envelope`]: envelope::Envelope

use axum::{Json, http::StatusCode, response::IntoResponse};
use sea_orm::DbErr;

use api_types::validate::ValidationErrors;
use ledger::LedgerError;

use crate::envelope::Envelope;

pub use server::{run, run_with_listener, spawn_with_listener};
pub use server::{ServerState, router};

mod crud;
mod envelope;
mod server;

pub enum ApiErrorKind {
    /// The request body was not parseable as the expected shape.
    Invalid(String),
    /// The body parsed but failed field-level constraints.
    Validation(ValidationErrors),
    /// A referenced entity id does not exist.
    ForeignKey { code: &'static str },
    /// The entity being operated on does not exist.
    NotFound,
    /// A uniqueness invariant was violated.
    Conflict(String),
    Database(DbErr),
}

/// An error response tagged with the entity domain it was raised for,
/// so the log line and the `<DOMAIN>_NOT_FOUND` code can name it.
pub struct ApiError {
    domain: &'static str,
    kind: ApiErrorKind,
}

impl ApiError {
    pub fn invalid(domain: &'static str, detail: String) -> Self {
        Self {
            domain,
            kind: ApiErrorKind::Invalid(detail),
        }
    }

    pub fn validation(domain: &'static str, errors: ValidationErrors) -> Self {
        Self {
            domain,
            kind: ApiErrorKind::Validation(errors),
        }
    }

    pub fn not_found(domain: &'static str) -> Self {
        Self {
            domain,
            kind: ApiErrorKind::NotFound,
        }
    }

    pub fn ledger(domain: &'static str, err: LedgerError) -> Self {
        let kind = match err {
            LedgerError::ForeignKey { code, .. } => ApiErrorKind::ForeignKey { code },
            LedgerError::Conflict(detail) => ApiErrorKind::Conflict(detail),
            LedgerError::Database(err) => ApiErrorKind::Database(err),
        };
        Self { domain, kind }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let domain = self.domain;
        let (status, code, details) = match self.kind {
            ApiErrorKind::Invalid(detail) => {
                (StatusCode::BAD_REQUEST, "INVALID_DATA".to_string(), detail)
            }
            ApiErrorKind::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR".to_string(),
                errors.to_string(),
            ),
            ApiErrorKind::ForeignKey { code } => (
                StatusCode::BAD_REQUEST,
                "FK_ERROR".to_string(),
                code.to_string(),
            ),
            ApiErrorKind::NotFound => (
                StatusCode::NOT_FOUND,
                format!("{domain}_NOT_FOUND"),
                "NONE".to_string(),
            ),
            ApiErrorKind::Conflict(detail) => {
                (StatusCode::CONFLICT, "UNIQUENESS_ERROR".to_string(), detail)
            }
            ApiErrorKind::Database(err) => {
                // The raw message goes to the log only.
                tracing::error!(domain, "database error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR".to_string(),
                    "NONE".to_string(),
                )
            }
        };

        tracing::warn!(domain, code = %code, details = %details, "request failed");
        (
            status,
            Json(Envelope {
                response: code,
                details,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_data_maps_to_400() {
        let res = ApiError::invalid("EXPENSE", "not json".to_string()).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn foreign_key_maps_to_400() {
        let err = ApiError::ledger(
            "EXPENSE",
            LedgerError::ForeignKey {
                field: "category_id",
                code: "CATEGORY_NOT_FOUND",
            },
        );
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let res = ApiError::not_found("HOUSEHOLD").into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = ApiError::ledger("USER", LedgerError::Conflict("dni taken".to_string()));
        assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn database_maps_to_500() {
        let err = ApiError::ledger(
            "BANK",
            LedgerError::Database(DbErr::Custom("boom".to_string())),
        );
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
