//! Segregated CRUD capability contracts.
//!
//! Each trait exposes one operation family so a consumer depends only
//! on what it needs: a read-only reporting caller can take a
//! [`Reader`] and is statically unable to delete anything. [`Crud`]
//! combines all five for callers that genuinely need everything.
//!
//! Both the generic repository (items = storage models) and the
//! generic service (items = read shapes) implement these contracts.
//! Methods return named `Send` futures instead of using `async fn`
//! directly so the contracts stay usable from `Send`-bounded contexts
//! like HTTP handlers.

use std::collections::HashMap;
use std::future::Future;

use crate::error::LedgerError;

/// Search filters as they arrive from a query string: field name to
/// raw value. Filters apply only to fields that exist on the entity;
/// unknown keys (and values that do not parse for the field) are
/// silently ignored. Permissive by design, not an error.
pub type Filters = HashMap<String, String>;

/// Read-only access by identity.
pub trait Reader {
    type Item;

    fn get_by_id(
        &self,
        id: i32,
    ) -> impl Future<Output = Result<Option<Self::Item>, LedgerError>> + Send;

    fn get_all(&self) -> impl Future<Output = Result<Vec<Self::Item>, LedgerError>> + Send;
}

/// Filtered listing and counting.
pub trait Searcher {
    type Item;

    fn search(
        &self,
        filters: &Filters,
    ) -> impl Future<Output = Result<Vec<Self::Item>, LedgerError>> + Send;

    fn count(&self, filters: &Filters) -> impl Future<Output = Result<u64, LedgerError>> + Send;
}

/// Insertion of a fully-validated payload.
pub trait Creator {
    type Input;
    type Item;

    fn create(
        &self,
        data: Self::Input,
    ) -> impl Future<Output = Result<Self::Item, LedgerError>> + Send;
}

/// Partial update: only fields present in the input are applied;
/// absent fields are left untouched, never nulled. `None` means the
/// target row does not exist; the caller decides how to report it.
pub trait Updater {
    type Input;
    type Item;

    fn update(
        &self,
        id: i32,
        data: Self::Input,
    ) -> impl Future<Output = Result<Option<Self::Item>, LedgerError>> + Send;
}

/// Hard delete. Returns whether a row existed and was removed.
pub trait Deleter {
    fn delete(&self, id: i32) -> impl Future<Output = Result<bool, LedgerError>> + Send;
}

/// Full CRUD: all five capabilities over one item type.
pub trait Crud:
    Reader
    + Searcher<Item = <Self as Reader>::Item>
    + Creator<Item = <Self as Reader>::Item>
    + Updater<Item = <Self as Reader>::Item>
    + Deleter
{
}

impl<T> Crud for T where
    T: Reader
        + Searcher<Item = <T as Reader>::Item>
        + Creator<Item = <T as Reader>::Item>
        + Updater<Item = <T as Reader>::Item>
        + Deleter
{
}
