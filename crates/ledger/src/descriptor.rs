//! Entity descriptor: the per-entity metadata the generic CRUD engine
//! is keyed by.
//!
//! A single [`Repository`]/[`Service`] pair is written once; each
//! entity contributes only a descriptor naming its sea-orm types, wire
//! shapes, explicit field assignment, filterable columns, foreign-key
//! map and (rarely) a uniqueness rule.
//!
//! [`Repository`]: crate::repository::Repository
//! [`Service`]: crate::service::Service

use std::future::Future;

use sea_orm::sea_query::SimpleExpr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use api_types::validate::Validate;

use crate::error::LedgerError;
use crate::fk::FkCheck;

/// Convenience alias for a descriptor's storage model.
pub type ModelOf<D> = <<D as EntityDescriptor>::Entity as EntityTrait>::Model;

/// The write being checked by [`EntityDescriptor::check_invariants`].
pub enum Change<'a, D: EntityDescriptor + ?Sized> {
    Create(&'a D::Create),
    Update { id: i32, data: &'a D::Update },
}

pub trait EntityDescriptor: Send + Sync + 'static {
    type Entity: EntityTrait<
            Model: IntoActiveModel<Self::ActiveModel> + Clone + Send + Sync,
            PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
        >;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + 'static;
    type Create: Validate + DeserializeOwned + Send + Sync + 'static;
    type Update: Validate + DeserializeOwned + Send + Sync + 'static;
    type Read: Serialize + Send + Sync + 'static;

    /// Upper-case singular name used in message codes and log tags
    /// (`EXPENSE` gives `EXPENSE_NOT_FOUND`, `EXPENSE_CREATED`, ...).
    const NAME: &'static str;

    /// Plural path segment this entity is served under.
    const SEGMENT: &'static str;

    /// Build the insert model from a validated create payload. Every
    /// field is assigned explicitly; identity stays `NotSet`.
    fn into_model(data: Self::Create) -> Self::ActiveModel;

    /// Apply a partial update: explicit per-field "set if present",
    /// never reflection. Absent fields keep their `Unchanged` value.
    fn apply_update(model: &mut Self::ActiveModel, data: Self::Update);

    /// Map a stored row to its read shape.
    fn to_read(model: ModelOf<Self>) -> Self::Read;

    /// Translate one search filter into a column expression. `None`
    /// means the field is not filterable on this entity and the filter
    /// is ignored.
    fn filter(field: &str, value: &str) -> Option<SimpleExpr> {
        let _ = (field, value);
        None
    }

    /// Foreign keys to verify before insertion, in the fixed order the
    /// first failure is reported in. Empty for root entities.
    fn foreign_keys(data: &Self::Create) -> Vec<FkCheck> {
        let _ = data;
        Vec::new()
    }

    /// Entity-specific invariants checked before a write reaches the
    /// repository (e.g. user DNI uniqueness). Default: none.
    fn check_invariants(
        db: &DatabaseConnection,
        change: Change<'_, Self>,
    ) -> impl Future<Output = Result<(), LedgerError>> + Send {
        let _ = (db, change);
        async { Ok(()) }
    }
}
