//! Saving log entries: dated movements against a saving pot.

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::ActiveValue;

use api_types::saving::{SavingLogCreate, SavingLogRead, SavingLogUpdate};

use crate::descriptor::EntityDescriptor;
use crate::fk::{FkCheck, FkTarget};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "savings_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub date: Date,
    pub amount: f64,
    pub total_amount: Option<f64>,
    pub note: Option<String>,
    pub saving_id: i32,
    pub source_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::savings::Entity",
        from = "Column::SavingId",
        to = "super::savings::Column::Id"
    )]
    Saving,
    #[sea_orm(
        belongs_to = "super::sources::Entity",
        from = "Column::SourceId",
        to = "super::sources::Column::Id"
    )]
    Source,
}

impl Related<super::savings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Saving.def()
    }
}

impl Related<super::sources::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Source.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub struct Descriptor;

impl EntityDescriptor for Descriptor {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = SavingLogCreate;
    type Update = SavingLogUpdate;
    type Read = SavingLogRead;

    const NAME: &'static str = "SAVING_LOG";
    const SEGMENT: &'static str = "savings_logs";

    fn into_model(data: SavingLogCreate) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(data.date),
            amount: ActiveValue::Set(data.amount),
            total_amount: ActiveValue::Set(data.total_amount),
            note: ActiveValue::Set(data.note),
            saving_id: ActiveValue::Set(data.saving_id),
            source_id: ActiveValue::Set(data.source_id),
        }
    }

    fn apply_update(model: &mut ActiveModel, data: SavingLogUpdate) {
        if let Some(date) = data.date {
            model.date = ActiveValue::Set(date);
        }
        if let Some(amount) = data.amount {
            model.amount = ActiveValue::Set(amount);
        }
        if let Some(total_amount) = data.total_amount {
            model.total_amount = ActiveValue::Set(Some(total_amount));
        }
        if let Some(note) = data.note {
            model.note = ActiveValue::Set(Some(note));
        }
    }

    fn to_read(model: Model) -> SavingLogRead {
        SavingLogRead {
            id: model.id,
            date: model.date,
            amount: model.amount,
            total_amount: model.total_amount,
            note: model.note,
            saving_id: model.saving_id,
            source_id: model.source_id,
        }
    }

    fn filter(field: &str, value: &str) -> Option<SimpleExpr> {
        match field {
            "saving_id" => value.parse::<i32>().ok().map(|v| Column::SavingId.eq(v)),
            "source_id" => value.parse::<i32>().ok().map(|v| Column::SourceId.eq(v)),
            _ => None,
        }
    }

    fn foreign_keys(data: &SavingLogCreate) -> Vec<FkCheck> {
        vec![
            FkCheck::required(
                "saving_id",
                "SAVING_NOT_FOUND",
                FkTarget::Saving,
                data.saving_id,
            ),
            FkCheck::required(
                "source_id",
                "SOURCE_NOT_FOUND",
                FkTarget::Source,
                data.source_id,
            ),
        ]
    }
}
