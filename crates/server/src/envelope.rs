//! The uniform wire wrapper: `{ "response": ..., "details": ... }`.
//!
//! On success `response` carries the payload and `details` the message
//! code; on error `response` carries the error code and `details` the
//! actionable detail. Both paths are logged, tagged by domain, before
//! the body leaves the handler.

use axum::{Json, http::StatusCode};
use serde::Serialize;

#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub response: T,
    pub details: String,
}

/// 201 with the created record.
pub fn created<T: Serialize>(domain: &'static str, payload: T) -> (StatusCode, Json<Envelope<T>>) {
    with_data(domain, StatusCode::CREATED, format!("{domain}_CREATED"), payload)
}

/// 200 with a fetched or updated record (or a list).
pub fn ok<T: Serialize>(
    domain: &'static str,
    code: String,
    payload: T,
) -> (StatusCode, Json<Envelope<T>>) {
    with_data(domain, StatusCode::OK, code, payload)
}

/// 204 with no body.
pub fn no_content(domain: &'static str) -> StatusCode {
    let code = format!("{domain}_DELETED");
    tracing::info!(domain, code = %code, "request served");
    StatusCode::NO_CONTENT
}

fn with_data<T: Serialize>(
    domain: &'static str,
    status: StatusCode,
    code: String,
    payload: T,
) -> (StatusCode, Json<Envelope<T>>) {
    tracing::info!(domain, code = %code, "request served");
    (
        status,
        Json(Envelope {
            response: payload,
            details: code,
        }),
    )
}
