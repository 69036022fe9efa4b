//! Users table and CRUD descriptor.
//!
//! A user is the owner of accounts, transactions and household
//! memberships. The DNI (Spanish national id) is unique across all
//! users: the descriptor's invariant check rejects a create with an
//! existing DNI and an update that would move a taken DNI onto a
//! different user. The stored password never appears in the read
//! shape.

use std::future::Future;

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ActiveValue, QueryFilter};

use api_types::enums::UserRole;
use api_types::user::{UserCreate, UserRead, UserUpdate};

use crate::descriptor::{Change, EntityDescriptor};
use crate::error::LedgerError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub surname1: String,
    pub surname2: Option<String>,
    pub dni: String,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub password: String,
    pub active: bool,
    pub role: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::accounts::Entity")]
    Accounts,
    #[sea_orm(has_many = "super::expenses::Entity")]
    Expenses,
    #[sea_orm(has_many = "super::incomes::Entity")]
    Incomes,
    #[sea_orm(has_many = "super::savings::Entity")]
    Savings,
    #[sea_orm(has_many = "super::investments::Entity")]
    Investments,
    #[sea_orm(has_many = "super::financial_summaries::Entity")]
    FinancialSummaries,
    #[sea_orm(has_many = "super::household_members::Entity")]
    HouseholdMembers,
}

impl ActiveModelBehavior for ActiveModel {}

/// Lookup used by the uniqueness invariant.
pub async fn find_by_dni(db: &DatabaseConnection, dni: &str) -> Result<Option<Model>, DbErr> {
    Entity::find().filter(Column::Dni.eq(dni)).one(db).await
}

pub struct Descriptor;

impl EntityDescriptor for Descriptor {
    type Entity = Entity;
    type ActiveModel = ActiveModel;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Read = UserRead;

    const NAME: &'static str = "USER";
    const SEGMENT: &'static str = "users";

    fn into_model(data: UserCreate) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(data.name),
            surname1: ActiveValue::Set(data.surname1),
            surname2: ActiveValue::Set(data.surname2),
            dni: ActiveValue::Set(data.dni),
            email: ActiveValue::Set(data.email),
            telephone: ActiveValue::Set(data.telephone),
            password: ActiveValue::Set(data.password),
            active: ActiveValue::Set(data.active.unwrap_or(true)),
            role: ActiveValue::Set(data.role.unwrap_or_default().as_str().to_string()),
        }
    }

    fn apply_update(model: &mut ActiveModel, data: UserUpdate) {
        if let Some(name) = data.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(surname1) = data.surname1 {
            model.surname1 = ActiveValue::Set(surname1);
        }
        if let Some(surname2) = data.surname2 {
            model.surname2 = ActiveValue::Set(Some(surname2));
        }
        if let Some(dni) = data.dni {
            model.dni = ActiveValue::Set(dni);
        }
        if let Some(email) = data.email {
            model.email = ActiveValue::Set(Some(email));
        }
        if let Some(telephone) = data.telephone {
            model.telephone = ActiveValue::Set(Some(telephone));
        }
        if let Some(password) = data.password {
            model.password = ActiveValue::Set(password);
        }
        if let Some(active) = data.active {
            model.active = ActiveValue::Set(active);
        }
        if let Some(role) = data.role {
            model.role = ActiveValue::Set(role.as_str().to_string());
        }
    }

    fn to_read(model: Model) -> UserRead {
        UserRead {
            id: model.id,
            name: model.name,
            surname1: model.surname1,
            surname2: model.surname2,
            dni: model.dni,
            email: model.email,
            telephone: model.telephone,
            active: model.active,
            role: UserRole::try_from(model.role.as_str()).unwrap_or_default(),
        }
    }

    fn filter(field: &str, value: &str) -> Option<SimpleExpr> {
        match field {
            "name" => Some(Column::Name.eq(value)),
            "surname1" => Some(Column::Surname1.eq(value)),
            "dni" => Some(Column::Dni.eq(value)),
            "email" => Some(Column::Email.eq(value)),
            "active" => value.parse::<bool>().ok().map(|v| Column::Active.eq(v)),
            "role" => Some(Column::Role.eq(value)),
            _ => None,
        }
    }

    fn check_invariants(
        db: &DatabaseConnection,
        change: Change<'_, Self>,
    ) -> impl Future<Output = Result<(), LedgerError>> + Send {
        async move {
            match change {
                Change::Create(data) => {
                    if find_by_dni(db, &data.dni).await?.is_some() {
                        return Err(LedgerError::Conflict(format!(
                            "a user with DNI {} already exists",
                            data.dni
                        )));
                    }
                }
                Change::Update { id, data } => {
                    if let Some(dni) = &data.dni
                        && let Some(existing) = find_by_dni(db, dni).await?
                        && existing.id != id
                    {
                        return Err(LedgerError::Conflict(format!(
                            "another user already holds DNI {dni}"
                        )));
                    }
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_stays_out_of_the_read_shape() {
        let read = Descriptor::to_read(Model {
            id: 7,
            name: "Ana".to_string(),
            surname1: "García".to_string(),
            surname2: None,
            dni: "12345678Z".to_string(),
            email: None,
            telephone: None,
            password: "hash".to_string(),
            active: true,
            role: "editor".to_string(),
        });
        assert_eq!(read.id, 7);
        assert_eq!(read.role, UserRole::Editor);
        let json = serde_json::to_value(&read).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn unknown_filter_field_is_ignored() {
        assert!(Descriptor::filter("favourite_color", "blue").is_none());
        assert!(Descriptor::filter("dni", "12345678Z").is_some());
    }
}
