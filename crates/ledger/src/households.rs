//! Households table and CRUD descriptor.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::ActiveValue;

use api_types::household::{HouseholdCreate, HouseholdRead, HouseholdUpdate};

use crate::descriptor::EntityDescriptor;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "households")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::household_members::Entity")]
    HouseholdMembers,
    #[sea_orm(has_many = "super::financial_summaries::Entity")]
    FinancialSummaries,
}

impl ActiveModelBehavior for ActiveModel {}

pub struct Descriptor;

impl EntityDescriptor for Descriptor {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = HouseholdCreate;
    type Update = HouseholdUpdate;
    type Read = HouseholdRead;

    const NAME: &'static str = "HOUSEHOLD";
    const SEGMENT: &'static str = "households";

    fn into_model(data: HouseholdCreate) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(data.name),
            address: ActiveValue::Set(data.address),
            active: ActiveValue::Set(data.active.unwrap_or(true)),
        }
    }

    fn apply_update(model: &mut ActiveModel, data: HouseholdUpdate) {
        if let Some(name) = data.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(address) = data.address {
            model.address = ActiveValue::Set(Some(address));
        }
        if let Some(active) = data.active {
            model.active = ActiveValue::Set(active);
        }
    }

    fn to_read(model: Model) -> HouseholdRead {
        HouseholdRead {
            id: model.id,
            name: model.name,
            address: model.address,
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
