//! Bank accounts table and CRUD descriptor.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::ActiveValue;

use api_types::account::{AccountCreate, AccountRead, AccountUpdate};

use crate::descriptor::EntityDescriptor;
use crate::fk::{FkCheck, FkTarget};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub iban: String,
    pub balance: f64,
    pub active: bool,
    pub user_id: i32,
    pub bank_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::banks::Entity",
        from = "Column::BankId",
        to = "super::banks::Column::Id"
    )]
    Bank,
    #[sea_orm(has_many = "super::savings::Entity")]
    Savings,
    #[sea_orm(has_many = "super::investments::Entity")]
    Investments,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::banks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bank.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub struct Descriptor;

impl EntityDescriptor for Descriptor {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = AccountCreate;
    type Update = AccountUpdate;
    type Read = AccountRead;

    const NAME: &'static str = "ACCOUNT";
    const SEGMENT: &'static str = "accounts";

    fn into_model(data: AccountCreate) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(data.name),
            description: ActiveValue::Set(data.description),
            iban: ActiveValue::Set(data.iban),
            balance: ActiveValue::Set(data.balance),
            active: ActiveValue::Set(data.active.unwrap_or(true)),
            user_id: ActiveValue::Set(data.user_id),
            bank_id: ActiveValue::Set(data.bank_id),
        }
    }

    fn apply_update(model: &mut ActiveModel, data: AccountUpdate) {
        if let Some(name) = data.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = data.description {
            model.description = ActiveValue::Set(Some(description));
        }
        if let Some(iban) = data.iban {
            model.iban = ActiveValue::Set(iban);
        }
        if let Some(balance) = data.balance {
            model.balance = ActiveValue::Set(balance);
        }
        if let Some(active) = data.active {
            model.active = ActiveValue::Set(active);
        }
    }

    fn to_read(model: Model) -> AccountRead {
        AccountRead {
            id: model.id,
            name: model.name,
            description: model.description,
            iban: model.iban,
            balance: model.balance,
            active: model.active,
            user_id: model.user_id,
            bank_id: model.bank_id,
        }
    }

    fn filter(field: &str, value: &str) -> Option<SimpleExpr> {
        match field {
            "name" => Some(Column::Name.eq(value)),
            "iban" => Some(Column::Iban.eq(value)),
            "active" => value.parse::<bool>().ok().map(|v| Column::Active.eq(v)),
            "user_id" => value.parse::<i32>().ok().map(|v| Column::UserId.eq(v)),
            "bank_id" => value.parse::<i32>().ok().map(|v| Column::BankId.eq(v)),
            _ => None,
        }
    }

    fn foreign_keys(data: &AccountCreate) -> Vec<FkCheck> {
        vec![
            FkCheck::required("user_id", "USER_NOT_FOUND", FkTarget::User, data.user_id),
            FkCheck::required("bank_id", "BANK_NOT_FOUND", FkTarget::Bank, data.bank_id),
        ]
    }
}
