//! Generic service: orchestrates foreign-key validation, entity
//! invariants and the repository, and maps storage rows to read
//! shapes.
//!
//! One service depends on exactly one repository. Services hold no
//! state across calls; every operation is an independent unit of work
//! on the shared pool, so concurrent updates to the same row are
//! last-write-wins (no version column, known limitation).

use sea_orm::DatabaseConnection;

use crate::crud::{Creator, Deleter, Filters, Reader, Searcher, Updater};
use crate::descriptor::{Change, EntityDescriptor};
use crate::error::LedgerError;
use crate::fk::validate_foreign_keys;
use crate::repository::Repository;

pub struct Service<D: EntityDescriptor> {
    db: DatabaseConnection,
    repository: Repository<D>,
}

impl<D: EntityDescriptor> Service<D> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            repository: Repository::new(db.clone()),
            db,
        }
    }
}

impl<D: EntityDescriptor> Reader for Service<D> {
    type Item = D::Read;

    async fn get_by_id(&self, id: i32) -> Result<Option<Self::Item>, LedgerError> {
        Ok(self.repository.get_by_id(id).await?.map(D::to_read))
    }

    async fn get_all(&self) -> Result<Vec<Self::Item>, LedgerError> {
        Ok(self
            .repository
            .get_all()
            .await?
            .into_iter()
            .map(D::to_read)
            .collect())
    }
}

impl<D: EntityDescriptor> Searcher for Service<D> {
    type Item = D::Read;

    async fn search(&self, filters: &Filters) -> Result<Vec<Self::Item>, LedgerError> {
        Ok(self
            .repository
            .search(filters)
            .await?
            .into_iter()
            .map(D::to_read)
            .collect())
    }

    async fn count(&self, filters: &Filters) -> Result<u64, LedgerError> {
        self.repository.count(filters).await
    }
}

impl<D: EntityDescriptor> Creator for Service<D> {
    type Input = D::Create;
    type Item = D::Read;

    /// Foreign keys first (fixed order, first failure), then entity
    /// invariants, then the insert.
    async fn create(&self, data: Self::Input) -> Result<Self::Item, LedgerError> {
        validate_foreign_keys(&self.db, D::foreign_keys(&data)).await?;
        D::check_invariants(&self.db, Change::Create(&data)).await?;
        let model = self.repository.create(data).await?;
        Ok(D::to_read(model))
    }
}

impl<D: EntityDescriptor> Updater for Service<D> {
    type Input = D::Update;
    type Item = D::Read;

    /// Partial update: only fields present in the payload are applied.
    /// References are validated on insert only; a dangling reference
    /// in a patch is caught by the storage constraint.
    async fn update(&self, id: i32, data: Self::Input) -> Result<Option<Self::Item>, LedgerError> {
        D::check_invariants(&self.db, Change::Update { id, data: &data }).await?;
        Ok(self.repository.update(id, data).await?.map(D::to_read))
    }
}

impl<D: EntityDescriptor> Deleter for Service<D> {
    async fn delete(&self, id: i32) -> Result<bool, LedgerError> {
        self.repository.delete(id).await
    }
}
