//! Incomes table and CRUD descriptor. Mirrors the expense layout but
//! references the income category table.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::ActiveValue;

use api_types::enums::Currency;
use api_types::income::{IncomeCreate, IncomeRead, IncomeUpdate};

use crate::descriptor::EntityDescriptor;
use crate::fk::{FkCheck, FkTarget};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "incomes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub amount: f64,
    pub date: Date,
    pub currency: String,
    pub user_id: i32,
    pub source_id: i32,
    pub category_id: i32,
    pub account_id: Option<i32>,
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
        belongs_to = "super::sources::Entity",
        from = "Column::SourceId",
        to = "super::sources::Column::Id"
    )]
    Source,
    #[sea_orm(
        belongs_to = "super::income_categories::Entity",
        from = "Column::CategoryId",
        to = "super::income_categories::Column::Id"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::accounts::Entity",
        from = "Column::AccountId",
        to = "super::accounts::Column::Id"
    )]
    Account,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::sources::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Source.def()
    }
}

impl Related<super::income_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
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
    type Create = IncomeCreate;
    type Update = IncomeUpdate;
    type Read = IncomeRead;

    const NAME: &'static str = "INCOME";
    const SEGMENT: &'static str = "incomes";

    fn into_model(data: IncomeCreate) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(data.name),
            description: ActiveValue::Set(data.description),
            amount: ActiveValue::Set(data.amount),
            date: ActiveValue::Set(data.date),
            currency: ActiveValue::Set(data.currency.code().to_string()),
            user_id: ActiveValue::Set(data.user_id),
            source_id: ActiveValue::Set(data.source_id),
            category_id: ActiveValue::Set(data.category_id),
            account_id: ActiveValue::Set(data.account_id),
        }
    }

    fn apply_update(model: &mut ActiveModel, data: IncomeUpdate) {
        if let Some(name) = data.name {
            model.name = ActiveValue::Set(name);
        }
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
        if let Some(source_id) = data.source_id {
            model.source_id = ActiveValue::Set(source_id);
        }
        if let Some(category_id) = data.category_id {
            model.category_id = ActiveValue::Set(category_id);
        }
        if let Some(account_id) = data.account_id {
            model.account_id = ActiveValue::Set(Some(account_id));
        }
    }

    fn to_read(model: Model) -> IncomeRead {
        IncomeRead {
            id: model.id,
            name: model.name,
            description: model.description,
            amount: model.amount,
            date: model.date,
            currency: Currency::try_from(model.currency.as_str()).unwrap_or_default(),
            user_id: model.user_id,
            source_id: model.source_id,
            category_id: model.category_id,
            account_id: model.account_id,
        }
    }

    fn filter(field: &str, value: &str) -> Option<SimpleExpr> {
        match field {
            "name" => Some(Column::Name.eq(value)),
            "currency" => Currency::try_from(value)
                .ok()
                .map(|c| Column::Currency.eq(c.code())),
            "user_id" => value.parse::<i32>().ok().map(|v| Column::UserId.eq(v)),
            "source_id" => value.parse::<i32>().ok().map(|v| Column::SourceId.eq(v)),
            "category_id" => value.parse::<i32>().ok().map(|v| Column::CategoryId.eq(v)),
            "account_id" => value.parse::<i32>().ok().map(|v| Column::AccountId.eq(v)),
            _ => None,
        }
    }

    fn foreign_keys(data: &IncomeCreate) -> Vec<FkCheck> {
        vec![
            FkCheck::required("user_id", "USER_NOT_FOUND", FkTarget::User, data.user_id),
            FkCheck::required(
                "source_id",
                "SOURCE_NOT_FOUND",
                FkTarget::Source,
                data.source_id,
            ),
            FkCheck::required(
                "category_id",
                "CATEGORY_NOT_FOUND",
                FkTarget::IncomesCategory,
                data.category_id,
            ),
            FkCheck::optional(
                "account_id",
                "ACCOUNT_NOT_FOUND",
                FkTarget::Account,
                data.account_id,
            ),
        ]
    }
}
