//! Savings table and CRUD descriptor. A saving is a standing pot tied
//! to an account; its history lives in the saving log table.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::ActiveValue;

use api_types::enums::Currency;
use api_types::saving::{SavingCreate, SavingRead, SavingUpdate};

use crate::descriptor::EntityDescriptor;
use crate::fk::{FkCheck, FkTarget};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "savings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: Option<String>,
    pub amount: f64,
    pub date: Date,
    pub currency: String,
    pub user_id: i32,
    pub account_id: i32,
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
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Account,
    #[sea_orm(has_many = "super::saving_logs::Entity")]
    SavingLogs,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::accounts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub struct Descriptor;

impl EntityDescriptor for Descriptor {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = SavingCreate;
    type Update = SavingUpdate;
    type Read = SavingRead;

    const NAME: &'static str = "SAVING";
    const SEGMENT: &'static str = "savings";

    fn into_model(data: SavingCreate) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            description: ActiveValue::Set(data.description),
            amount: ActiveValue::Set(data.amount),
            date: ActiveValue::Set(data.date),
            currency: ActiveValue::Set(data.currency.code().to_string()),
            user_id: ActiveValue::Set(data.user_id),
            account_id: ActiveValue::Set(data.account_id),
        }
    }

    fn apply_update(model: &mut ActiveModel, data: SavingUpdate) {
        if let Some(description) = data.description {
            model.description = ActiveValue::Set(Some(description));
        }
        if let Some(amount) = data.amount {
            model.amount = ActiveValue::Set(amount);
        }
        if let Some(date) = data.date {
            model.date = ActiveValue::Set(date);
        }
        if let Some(currency) = data.currency {
            model.currency = ActiveValue::Set(currency.code().to_string());
        }
        if let Some(user_id) = data.user_id {
            model.user_id = ActiveValue::Set(user_id);
        }
        if let Some(account_id) = data.account_id {
            model.account_id = ActiveValue::Set(account_id);
        }
    }

    fn to_read(model: Model) -> SavingRead {
        SavingRead {
            id: model.id,
            description: model.description,
            amount: model.amount,
            date: model.date,
            currency: Currency::try_from(model.currency.as_str()).unwrap_or_default(),
            user_id: model.user_id,
            account_id: model.account_id,
        }
    }

    fn filter(field: &str, value: &str) -> Option<SimpleExpr> {
        match field {
            "currency" => Currency::try_from(value)
                .ok()
                .map(|c| Column::Currency.eq(c.code())),
            "user_id" => value.parse::<i32>().ok().map(|v| Column::UserId.eq(v)),
            "account_id" => value.parse::<i32>().ok().map(|v| Column::AccountId.eq(v)),
            _ => None,
        }
    }

    fn foreign_keys(data: &SavingCreate) -> Vec<FkCheck> {
        vec![
            FkCheck::required("user_id", "USER_NOT_FOUND", FkTarget::User, data.user_id),
            FkCheck::required(
                "account_id",
                "ACCOUNT_NOT_FOUND",
                FkTarget::Account,
                data.account_id,
            ),
        ]
    }
}
