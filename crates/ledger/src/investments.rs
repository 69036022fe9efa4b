//! Investments table and CRUD descriptor. A position's valuation
//! history lives in the investment log table.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::ActiveValue;

use api_types::enums::Currency;
use api_types::investment::{InvestmentCreate, InvestmentRead, InvestmentUpdate};

use crate::descriptor::EntityDescriptor;
use crate::fk::{FkCheck, FkTarget};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "investments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: Option<String>,
    pub date: Date,
    pub currency: String,
    pub user_id: i32,
    pub account_id: i32,
    pub category_id: i32,
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
    #[sea_orm(
        belongs_to = "super::investment_categories::Entity",
        from = "Column::CategoryId",
        to = "super::investment_categories::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::investment_logs::Entity")]
    InvestmentLogs,
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

impl Related<super::investment_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub struct Descriptor;

impl EntityDescriptor for Descriptor {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = InvestmentCreate;
    type Update = InvestmentUpdate;
    type Read = InvestmentRead;

    const NAME: &'static str = "INVESTMENT";
    const SEGMENT: &'static str = "investments";

    fn into_model(data: InvestmentCreate) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(data.name),
            date: ActiveValue::Set(data.date),
            currency: ActiveValue::Set(data.currency.code().to_string()),
            user_id: ActiveValue::Set(data.user_id),
            account_id: ActiveValue::Set(data.account_id),
            category_id: ActiveValue::Set(data.category_id),
        }
    }

    fn apply_update(model: &mut ActiveModel, data: InvestmentUpdate) {
        if let Some(name) = data.name {
            model.name = ActiveValue::Set(Some(name));
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
        if let Some(category_id) = data.category_id {
            model.category_id = ActiveValue::Set(category_id);
        }
    }

    fn to_read(model: Model) -> InvestmentRead {
        InvestmentRead {
            id: model.id,
            name: model.name,
            date: model.date,
            currency: Currency::try_from(model.currency.as_str()).unwrap_or_default(),
            user_id: model.user_id,
            account_id: model.account_id,
            category_id: model.category_id,
        }
    }

    fn filter(field: &str, value: &str) -> Option<SimpleExpr> {
        match field {
            "name" => Some(Column::Name.eq(value)),
            "currency" => Currency::try_from(value)
                .ok()
                .map(|c| Column::Currency.eq(c.code())),
            "user_id" => value.parse::<i32>().ok().map(|v| Column::UserId.eq(v)),
            "account_id" => value.parse::<i32>().ok().map(|v| Column::AccountId.eq(v)),
            "category_id" => value.parse::<i32>().ok().map(|v| Column::CategoryId.eq(v)),
            _ => None,
        }
    }

    fn foreign_keys(data: &InvestmentCreate) -> Vec<FkCheck> {
        vec![
            FkCheck::required("user_id", "USER_NOT_FOUND", FkTarget::User, data.user_id),
            FkCheck::required(
                "account_id",
                "ACCOUNT_NOT_FOUND",
                FkTarget::Account,
                data.account_id,
            ),
            FkCheck::required(
                "category_id",
                "CATEGORY_NOT_FOUND",
                FkTarget::InvestmentsCategory,
                data.category_id,
            ),
        ]
    }
}
