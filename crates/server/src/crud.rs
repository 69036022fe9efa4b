//! Generic CRUD handlers, instantiated once per entity descriptor.
//!
//! Each handler follows the same boundary discipline: parse (malformed
//! bodies become `INVALID_DATA`), run pure shape validation, then hand
//! the payload to the entity's service. Foreign keys and uniqueness
//! are the service's business; nothing here touches storage directly.

use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use api_types::validate::Validate;
use ledger::{Creator, Deleter, EntityDescriptor, Filters, Reader, Searcher, Service, Updater};

use crate::envelope::{self, Envelope};
use crate::server::ServerState;
use crate::ApiError;

pub async fn create<D: EntityDescriptor>(
    State(state): State<ServerState>,
    payload: Result<Json<D::Create>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<D::Read>>), ApiError> {
    let Json(data) = payload.map_err(|err| ApiError::invalid(D::NAME, err.body_text()))?;
    data.validate()
        .map_err(|errors| ApiError::validation(D::NAME, errors))?;

    let record = Service::<D>::new(state.db.clone())
        .create(data)
        .await
        .map_err(|err| ApiError::ledger(D::NAME, err))?;

    Ok(envelope::created(D::NAME, record))
}

pub async fn list<D: EntityDescriptor>(
    State(state): State<ServerState>,
    Query(filters): Query<Filters>,
) -> Result<(StatusCode, Json<Envelope<Vec<D::Read>>>), ApiError> {
    let service = Service::<D>::new(state.db.clone());
    let records = if filters.is_empty() {
        service.get_all().await
    } else {
        service.search(&filters).await
    }
    .map_err(|err| ApiError::ledger(D::NAME, err))?;

    Ok(envelope::ok(D::NAME, format!("{}_LIST", D::NAME), records))
}

pub async fn get_one<D: EntityDescriptor>(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<(StatusCode, Json<Envelope<D::Read>>), ApiError> {
    let record = Service::<D>::new(state.db.clone())
        .get_by_id(id)
        .await
        .map_err(|err| ApiError::ledger(D::NAME, err))?
        .ok_or_else(|| ApiError::not_found(D::NAME))?;

    Ok(envelope::ok(D::NAME, format!("{}_FOUND", D::NAME), record))
}

pub async fn update<D: EntityDescriptor>(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    payload: Result<Json<D::Update>, JsonRejection>,
) -> Result<(StatusCode, Json<Envelope<D::Read>>), ApiError> {
    let Json(data) = payload.map_err(|err| ApiError::invalid(D::NAME, err.body_text()))?;
    data.validate()
        .map_err(|errors| ApiError::validation(D::NAME, errors))?;

    let record = Service::<D>::new(state.db.clone())
        .update(id, data)
        .await
        .map_err(|err| ApiError::ledger(D::NAME, err))?
        .ok_or_else(|| ApiError::not_found(D::NAME))?;

    Ok(envelope::ok(D::NAME, format!("{}_UPDATED", D::NAME), record))
}

pub async fn remove<D: EntityDescriptor>(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let deleted = Service::<D>::new(state.db.clone())
        .delete(id)
        .await
        .map_err(|err| ApiError::ledger(D::NAME, err))?;

    if !deleted {
        return Err(ApiError::not_found(D::NAME));
    }
    Ok(envelope::no_content(D::NAME))
}
