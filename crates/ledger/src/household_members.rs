//! Household membership rows joining a user to a household with a role.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::ActiveValue;

use api_types::enums::HouseholdRole;
use api_types::household::{HouseholdMemberCreate, HouseholdMemberRead, HouseholdMemberUpdate};

use crate::descriptor::EntityDescriptor;
use crate::fk::{FkCheck, FkTarget};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "household_members")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub role: String,
    pub active: bool,
    pub household_id: i32,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::households::Entity",
        from = "Column::HouseholdId",
        to = "super::households::Column::Id"
    )]
    Household,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::households::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Household.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub struct Descriptor;

impl EntityDescriptor for Descriptor {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = HouseholdMemberCreate;
    type Update = HouseholdMemberUpdate;
    type Read = HouseholdMemberRead;

    const NAME: &'static str = "HOUSEHOLD_MEMBER";
    const SEGMENT: &'static str = "household_members";

    fn into_model(data: HouseholdMemberCreate) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            role: ActiveValue::Set(data.role.as_str().to_string()),
            active: ActiveValue::Set(data.active.unwrap_or(true)),
            household_id: ActiveValue::Set(data.household_id),
            user_id: ActiveValue::Set(data.user_id),
        }
    }

    fn apply_update(model: &mut ActiveModel, data: HouseholdMemberUpdate) {
        if let Some(role) = data.role {
            model.role = ActiveValue::Set(role.as_str().to_string());
        }
        if let Some(active) = data.active {
            model.active = ActiveValue::Set(active);
        }
    }

    fn to_read(model: Model) -> HouseholdMemberRead {
        HouseholdMemberRead {
            id: model.id,
            role: HouseholdRole::try_from(model.role.as_str()).unwrap_or_default(),
            active: model.active,
            household_id: model.household_id,
            user_id: model.user_id,
        }
    }

    fn filter(field: &str, value: &str) -> Option<SimpleExpr> {
        match field {
            "role" => Some(Column::Role.eq(value)),
            "active" => value.parse::<bool>().ok().map(|v| Column::Active.eq(v)),
            "household_id" => value
                .parse::<i32>()
                .ok()
                .map(|v| Column::HouseholdId.eq(v)),
            "user_id" => value.parse::<i32>().ok().map(|v| Column::UserId.eq(v)),
            _ => None,
        }
    }

    fn foreign_keys(data: &HouseholdMemberCreate) -> Vec<FkCheck> {
        vec![
            FkCheck::required(
                "household_id",
                "HOUSEHOLD_NOT_FOUND",
                FkTarget::Household,
                data.household_id,
            ),
            FkCheck::required("user_id", "USER_NOT_FOUND", FkTarget::User, data.user_id),
        ]
    }
}
