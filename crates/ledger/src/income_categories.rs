//! Income categories table and CRUD descriptor.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::ActiveValue;

use api_types::category::{CategoryCreate, CategoryRead, CategoryUpdate};

use crate::descriptor::EntityDescriptor;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "incomes_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::incomes::Entity")]
    Incomes,
}

impl ActiveModelBehavior for ActiveModel {}

pub struct Descriptor;

impl EntityDescriptor for Descriptor {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Read = CategoryRead;

    const NAME: &'static str = "INCOMES_CATEGORY";
    const SEGMENT: &'static str = "incomes_categories";

    fn into_model(data: CategoryCreate) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(data.name),
            description: ActiveValue::Set(data.description),
            active: ActiveValue::Set(data.active.unwrap_or(true)),
        }
    }

    fn apply_update(model: &mut ActiveModel, data: CategoryUpdate) {
        if let Some(name) = data.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = data.description {
            model.description = ActiveValue::Set(Some(description));
        }
        if let Some(active) = data.active {
            model.active = ActiveValue::Set(active);
        }
    }

    fn to_read(model: Model) -> CategoryRead {
        CategoryRead {
            id: model.id,
            name: model.name,
            description: model.description,
            active: model.active,
        }
    }

    fn filter(field: &str, value: &str) -> Option<SimpleExpr> {
        match field {
            "name" => Some(Column::Name.eq(value)),
            "active" => value.parse::<bool>().ok().map(|v| Column::Active.eq(v)),
            _ => None,
        }
    }
}
