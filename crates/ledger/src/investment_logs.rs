//! Investment log entries: dated valuations and trades of a position.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::ActiveValue;

use api_types::enums::InvestmentAction;
use api_types::investment::{InvestmentLogCreate, InvestmentLogRead, InvestmentLogUpdate};

use crate::descriptor::EntityDescriptor;
use crate::fk::{FkCheck, FkTarget};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "investments_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub current_value: f64,
    pub price_per_unit: Option<f64>,
    pub units_bought: Option<f64>,
    pub action: String,
    pub note: Option<String>,
    pub investment_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::investments::Entity",
        from = "Column::InvestmentId",
        to = "super::investments::Column::Id"
    )]
    Investment,
}

impl Related<super::investments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Investment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub struct Descriptor;

impl EntityDescriptor for Descriptor {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = InvestmentLogCreate;
    type Update = InvestmentLogUpdate;
    type Read = InvestmentLogRead;

    const NAME: &'static str = "INVESTMENT_LOG";
    const SEGMENT: &'static str = "investments_logs";

    fn into_model(data: InvestmentLogCreate) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(data.date),
            current_value: ActiveValue::Set(data.current_value),
            price_per_unit: ActiveValue::Set(data.price_per_unit),
            units_bought: ActiveValue::Set(data.units_bought),
            action: ActiveValue::Set(data.action.as_str().to_string()),
            note: ActiveValue::Set(data.note),
            investment_id: ActiveValue::Set(data.investment_id),
        }
    }

    fn apply_update(model: &mut ActiveModel, data: InvestmentLogUpdate) {
        if let Some(date) = data.date {
            model.date = ActiveValue::Set(date);
        }
        if let Some(current_value) = data.current_value {
            model.current_value = ActiveValue::Set(current_value);
        }
        if let Some(price_per_unit) = data.price_per_unit {
            model.price_per_unit = ActiveValue::Set(Some(price_per_unit));
        }
        if let Some(units_bought) = data.units_bought {
            model.units_bought = ActiveValue::Set(Some(units_bought));
        }
        if let Some(action) = data.action {
            model.action = ActiveValue::Set(action.as_str().to_string());
        }
        if let Some(note) = data.note {
            model.note = ActiveValue::Set(Some(note));
        }
    }

    fn to_read(model: Model) -> InvestmentLogRead {
        InvestmentLogRead {
            id: model.id,
            date: model.date,
            current_value: model.current_value,
            price_per_unit: model.price_per_unit,
            units_bought: model.units_bought,
            action: InvestmentAction::try_from(model.action.as_str()).unwrap_or_default(),
            note: model.note,
            investment_id: model.investment_id,
        }
    }

    fn filter(field: &str, value: &str) -> Option<SimpleExpr> {
        match field {
            "action" => Some(Column::Action.eq(value)),
            "investment_id" => value
                .parse::<i32>()
                .ok()
                .map(|v| Column::InvestmentId.eq(v)),
            _ => None,
        }
    }

    fn foreign_keys(data: &InvestmentLogCreate) -> Vec<FkCheck> {
        vec![FkCheck::required(
            "investment_id",
            "INVESTMENT_NOT_FOUND",
            FkTarget::Investment,
            data.investment_id,
        )]
    }
}
