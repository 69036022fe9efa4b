//! Expenses table and CRUD descriptor.
//!
//! Expenses carry the densest foreign-key map of the schema: user,
//! source and category are required, the account is optional (cash
//! expenses have none). The checks are listed in the order failures
//! are reported in.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::ActiveValue;

use api_types::enums::Currency;
use api_types::expense::{ExpenseCreate, ExpenseRead, ExpenseUpdate};

use crate::descriptor::EntityDescriptor;
use crate::fk::{FkCheck, FkTarget};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
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
        belongs_to = "super::expense_categories::Entity",
        from = "Column::CategoryId",
        to = "super::expense_categories::Column::Id"
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

impl Related<super::expense_categories::Entity> for Entity {
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
    type Create = ExpenseCreate;
    type Update = ExpenseUpdate;
    type Read = ExpenseRead;

    const NAME: &'static str = "EXPENSE";
    const SEGMENT: &'static str = "expenses";

    fn into_model(data: ExpenseCreate) -> ActiveModel {
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

    fn apply_update(model: &mut ActiveModel, data: ExpenseUpdate) {
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

    fn to_read(model: Model) -> ExpenseRead {
        ExpenseRead {
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

    fn foreign_keys(data: &ExpenseCreate) -> Vec<FkCheck> {
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
                FkTarget::ExpensesCategory,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_keys_are_checked_in_report_order() {
        let data = ExpenseCreate {
            name: "Groceries".to_string(),
            description: None,
            amount: 42.5,
            date: chrono::NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            currency: Currency::Euro,
            user_id: 1,
            source_id: 2,
            category_id: 3,
            account_id: None,
        };
        let checks = Descriptor::foreign_keys(&data);
        let fields: Vec<&str> = checks.iter().map(|c| c.field).collect();
        assert_eq!(
            fields,
            ["user_id", "source_id", "category_id", "account_id"]
        );
        assert_eq!(checks[3].id, None);
    }
}
