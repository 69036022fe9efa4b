//! Financial summary snapshots. Derived elsewhere; stored and served
//! here as plain rows.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::ActiveValue;

use api_types::summary::{
    FinancialSummaryCreate, FinancialSummaryRead, FinancialSummaryUpdate,
};

use crate::descriptor::EntityDescriptor;
use crate::fk::{FkCheck, FkTarget};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "financial_summaries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub total_investments: f64,
    pub net_worth: f64,
    pub user_id: i32,
    pub household_id: i32,
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
        belongs_to = "super::households::Entity",
        from = "Column::HouseholdId",
        to = "super::households::Column::Id"
    )]
    Household,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::households::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Household.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub struct Descriptor;

impl EntityDescriptor for Descriptor {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = FinancialSummaryCreate;
    type Update = FinancialSummaryUpdate;
    type Read = FinancialSummaryRead;

    const NAME: &'static str = "FINANCIAL_SUMMARY";
    const SEGMENT: &'static str = "financial_summaries";

    fn into_model(data: FinancialSummaryCreate) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(data.date),
            total_income: ActiveValue::Set(data.total_income),
            total_expenses: ActiveValue::Set(data.total_expenses),
            total_savings: ActiveValue::Set(data.total_savings),
            total_investments: ActiveValue::Set(data.total_investments),
            net_worth: ActiveValue::Set(data.net_worth),
            user_id: ActiveValue::Set(data.user_id),
            household_id: ActiveValue::Set(data.household_id),
        }
    }

    fn apply_update(model: &mut ActiveModel, data: FinancialSummaryUpdate) {
        if let Some(date) = data.date {
            model.date = ActiveValue::Set(date);
        }
        if let Some(total_income) = data.total_income {
            model.total_income = ActiveValue::Set(total_income);
        }
        if let Some(total_expenses) = data.total_expenses {
            model.total_expenses = ActiveValue::Set(total_expenses);
        }
        if let Some(total_savings) = data.total_savings {
            model.total_savings = ActiveValue::Set(total_savings);
        }
        if let Some(total_investments) = data.total_investments {
            model.total_investments = ActiveValue::Set(total_investments);
        }
        if let Some(net_worth) = data.net_worth {
            model.net_worth = ActiveValue::Set(net_worth);
        }
    }

    fn to_read(model: Model) -> FinancialSummaryRead {
        FinancialSummaryRead {
            id: model.id,
            date: model.date,
            total_income: model.total_income,
            total_expenses: model.total_expenses,
            total_savings: model.total_savings,
            total_investments: model.total_investments,
            net_worth: model.net_worth,
            user_id: model.user_id,
            household_id: model.household_id,
        }
    }

    fn filter(field: &str, value: &str) -> Option<SimpleExpr> {
        match field {
            "user_id" => value.parse::<i32>().ok().map(|v| Column::UserId.eq(v)),
            "household_id" => value
                .parse::<i32>()
                .ok()
                .map(|v| Column::HouseholdId.eq(v)),
            _ => None,
        }
    }

    fn foreign_keys(data: &FinancialSummaryCreate) -> Vec<FkCheck> {
        vec![
            FkCheck::required("user_id", "USER_NOT_FOUND", FkTarget::User, data.user_id),
            FkCheck::required(
                "household_id",
                "HOUSEHOLD_NOT_FOUND",
                FkTarget::Household,
                data.household_id,
            ),
        ]
    }
}
