//! Generic repository: one instance per entity type, bound to the
//! shared connection pool, translating the segregated CRUD contracts
//! into storage operations against a single table.
//!
//! The repository works on storage models; mapping to read shapes is
//! the service's job. Storage failures surface uniformly as
//! [`LedgerError::Database`]; distinguishing them further is not this
//! layer's job either.

use std::marker::PhantomData;

use sea_orm::{Condition, DatabaseConnection, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter};

use crate::crud::{Creator, Deleter, Filters, Reader, Searcher, Updater};
use crate::descriptor::{EntityDescriptor, ModelOf};
use crate::error::LedgerError;

pub struct Repository<D: EntityDescriptor> {
    db: DatabaseConnection,
    marker: PhantomData<D>,
}

impl<D: EntityDescriptor> Repository<D> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            marker: PhantomData,
        }
    }

    /// Primary-key existence check. Foreign-key validation resolves
    /// every referenced id through the referenced entity's repository
    /// via this method.
    pub async fn exists(&self, id: i32) -> Result<bool, LedgerError> {
        Ok(<D::Entity as EntityTrait>::find_by_id(id)
            .one(&self.db)
            .await?
            .is_some())
    }

    fn condition(filters: &Filters) -> Condition {
        let mut condition = Condition::all();
        for (field, value) in filters {
            if let Some(expr) = D::filter(field, value) {
                condition = condition.add(expr);
            }
        }
        condition
    }
}

impl<D: EntityDescriptor> Reader for Repository<D> {
    type Item = ModelOf<D>;

    async fn get_by_id(&self, id: i32) -> Result<Option<Self::Item>, LedgerError> {
        Ok(<D::Entity as EntityTrait>::find_by_id(id)
            .one(&self.db)
            .await?)
    }

    async fn get_all(&self) -> Result<Vec<Self::Item>, LedgerError> {
        Ok(<D::Entity as EntityTrait>::find().all(&self.db).await?)
    }
}

impl<D: EntityDescriptor> Searcher for Repository<D> {
    type Item = ModelOf<D>;

    async fn search(&self, filters: &Filters) -> Result<Vec<Self::Item>, LedgerError> {
        Ok(<D::Entity as EntityTrait>::find()
            .filter(Self::condition(filters))
            .all(&self.db)
            .await?)
    }

    async fn count(&self, filters: &Filters) -> Result<u64, LedgerError> {
        Ok(<D::Entity as EntityTrait>::find()
            .filter(Self::condition(filters))
            .count(&self.db)
            .await?)
    }
}

impl<D: EntityDescriptor> Creator for Repository<D> {
    type Input = D::Create;
    type Item = ModelOf<D>;

    async fn create(&self, data: Self::Input) -> Result<Self::Item, LedgerError> {
        use sea_orm::ActiveModelTrait;

        Ok(D::into_model(data).insert(&self.db).await?)
    }
}

impl<D: EntityDescriptor> Updater for Repository<D> {
    type Input = D::Update;
    type Item = ModelOf<D>;

    async fn update(&self, id: i32, data: Self::Input) -> Result<Option<Self::Item>, LedgerError> {
        use sea_orm::ActiveModelTrait;

        let Some(model) = <D::Entity as EntityTrait>::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = model.clone().into_active_model();
        D::apply_update(&mut active, data);
        if !active.is_changed() {
            // Empty patch: nothing to write, echo the stored row.
            return Ok(Some(model));
        }
        Ok(Some(active.update(&self.db).await?))
    }
}

impl<D: EntityDescriptor> Deleter for Repository<D> {
    async fn delete(&self, id: i32) -> Result<bool, LedgerError> {
        let result = <D::Entity as EntityTrait>::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
