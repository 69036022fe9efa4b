use chrono::NaiveDate;
use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};

use api_types::account::AccountCreate;
use api_types::bank::{BankCreate, BankUpdate};
use api_types::category::CategoryCreate;
use api_types::enums::{Currency, HouseholdRole, SourceKind};
use api_types::expense::ExpenseCreate;
use api_types::household::{HouseholdCreate, HouseholdMemberCreate};
use api_types::source::SourceCreate;
use api_types::user::{UserCreate, UserUpdate};
use ledger::{
    Creator, Deleter, Filters, LedgerError, Reader, Repository, Searcher, Service, Updater,
    accounts, banks, expense_categories, expenses, household_members, households, sources, users,
};
use migration::MigratorTrait;

async fn fresh_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    db
}

fn user(dni: &str) -> UserCreate {
    UserCreate {
        name: "Ana".to_string(),
        surname1: "García".to_string(),
        surname2: None,
        dni: dni.to_string(),
        email: None,
        telephone: None,
        password: "Str0ng!pass".to_string(),
        active: None,
        role: None,
    }
}

fn expense(user_id: i32, source_id: i32, category_id: i32) -> ExpenseCreate {
    ExpenseCreate {
        name: "Groceries".to_string(),
        description: None,
        amount: 42.5,
        date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        currency: Currency::Euro,
        user_id,
        source_id,
        category_id,
        account_id: None,
    }
}

/// Seeds a user, a source and an expense category; returns their ids.
async fn seed_expense_refs(db: &DatabaseConnection) -> (i32, i32, i32) {
    let created_user = Service::<users::Descriptor>::new(db.clone())
        .create(user("12345678Z"))
        .await
        .unwrap();
    let source = Service::<sources::Descriptor>::new(db.clone())
        .create(SourceCreate {
            name: "Supermarket".to_string(),
            description: None,
            kind: Some(SourceKind::Expense),
            active: None,
        })
        .await
        .unwrap();
    let category = Service::<expense_categories::Descriptor>::new(db.clone())
        .create(CategoryCreate {
            name: "Food".to_string(),
            description: None,
            active: None,
        })
        .await
        .unwrap();
    (created_user.id, source.id, category.id)
}

#[tokio::test]
async fn create_then_reads_are_stable() {
    let db = fresh_db().await;
    let service = Service::<banks::Descriptor>::new(db);

    let created = service
        .create(BankCreate {
            name: "Caixa".to_string(),
            description: Some("main bank".to_string()),
            active: None,
        })
        .await
        .unwrap();
    assert!(created.active);

    let first = service.get_by_id(created.id).await.unwrap().unwrap();
    let second = service.get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(first, second);
    assert_eq!(first, created);

    let all = service.get_all().await.unwrap();
    assert_eq!(all, vec![created]);
}

#[tokio::test]
async fn partial_update_touches_only_named_fields() {
    let db = fresh_db().await;
    let service = Service::<banks::Descriptor>::new(db);

    let created = service
        .create(BankCreate {
            name: "Caixa".to_string(),
            description: Some("main bank".to_string()),
            active: None,
        })
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            BankUpdate {
                active: Some(false),
                ..BankUpdate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert!(!updated.active);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);
}

#[tokio::test]
async fn empty_patch_returns_the_stored_row() {
    let db = fresh_db().await;
    let service = Service::<banks::Descriptor>::new(db);

    let created = service
        .create(BankCreate {
            name: "Caixa".to_string(),
            description: None,
            active: None,
        })
        .await
        .unwrap();

    let echoed = service
        .update(created.id, BankUpdate::default())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(echoed, created);
}

#[tokio::test]
async fn delete_is_terminal() {
    let db = fresh_db().await;
    let service = Service::<banks::Descriptor>::new(db);

    let created = service
        .create(BankCreate {
            name: "Caixa".to_string(),
            description: None,
            active: None,
        })
        .await
        .unwrap();

    assert!(service.delete(created.id).await.unwrap());
    assert!(service.get_by_id(created.id).await.unwrap().is_none());
    assert!(!service.delete(created.id).await.unwrap());
    assert!(
        service
            .update(created.id, BankUpdate::default())
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn first_failing_foreign_key_wins() {
    let db = fresh_db().await;
    let (user_id, _, _) = seed_expense_refs(&db).await;
    let service = Service::<expenses::Descriptor>::new(db.clone());

    // Both the source and the category are dangling; the source is
    // checked first, so only it is reported.
    let err = service.create(expense(user_id, 998, 999)).await.unwrap_err();
    assert_eq!(
        err,
        LedgerError::ForeignKey {
            field: "source_id",
            code: "SOURCE_NOT_FOUND",
        }
    );

    // Nothing was persisted.
    let count = expenses::Entity::find().count(&db).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn optional_account_reference() {
    let db = fresh_db().await;
    let (user_id, source_id, category_id) = seed_expense_refs(&db).await;
    let service = Service::<expenses::Descriptor>::new(db);

    // Absent optional key: no check at all.
    let cash = service
        .create(expense(user_id, source_id, category_id))
        .await
        .unwrap();
    assert_eq!(cash.account_id, None);

    // Present but dangling: rejected like a required key.
    let mut data = expense(user_id, source_id, category_id);
    data.account_id = Some(999);
    let err = service.create(data).await.unwrap_err();
    assert_eq!(
        err,
        LedgerError::ForeignKey {
            field: "account_id",
            code: "ACCOUNT_NOT_FOUND",
        }
    );
}

#[tokio::test]
async fn dni_must_stay_unique() {
    let db = fresh_db().await;
    let service = Service::<users::Descriptor>::new(db);

    let first = service.create(user("12345678Z")).await.unwrap();
    let second = service.create(user("11111111H")).await.unwrap();

    // A second user cannot be created with a taken DNI.
    let err = service.create(user("12345678Z")).await.unwrap_err();
    assert!(matches!(err, LedgerError::Conflict(_)));

    // Nor can an update move a taken DNI onto another user.
    let err = service
        .update(
            second.id,
            UserUpdate {
                dni: Some("12345678Z".to_string()),
                ..UserUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::Conflict(_)));

    // Re-submitting a user's own DNI is not a conflict.
    let unchanged = service
        .update(
            first.id,
            UserUpdate {
                dni: Some("12345678Z".to_string()),
                ..UserUpdate::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged.dni, "12345678Z");
}

#[tokio::test]
async fn search_filters_by_known_fields_and_ignores_the_rest() {
    let db = fresh_db().await;
    let service = Service::<sources::Descriptor>::new(db);

    for (name, kind) in [
        ("Payroll", SourceKind::Income),
        ("Broker", SourceKind::Investment),
        ("Supermarket", SourceKind::Expense),
    ] {
        service
            .create(SourceCreate {
                name: name.to_string(),
                description: None,
                kind: Some(kind),
                active: None,
            })
            .await
            .unwrap();
    }

    let mut filters = Filters::new();
    filters.insert("kind".to_string(), "income".to_string());
    let found = service.search(&filters).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Payroll");
    assert_eq!(service.count(&filters).await.unwrap(), 1);

    // Unknown keys do not constrain the result.
    let mut filters = Filters::new();
    filters.insert("favourite_color".to_string(), "blue".to_string());
    assert_eq!(service.search(&filters).await.unwrap().len(), 3);
}

#[tokio::test]
async fn account_creation_checks_user_then_bank() {
    let db = fresh_db().await;
    let user_id = Service::<users::Descriptor>::new(db.clone())
        .create(user("12345678Z"))
        .await
        .unwrap()
        .id;
    let service = Service::<accounts::Descriptor>::new(db);

    let data = AccountCreate {
        name: "Checking".to_string(),
        description: None,
        iban: "ES9121000418450200051332".to_string(),
        balance: 1200.0,
        active: None,
        user_id,
        bank_id: 42,
    };
    let err = service.create(data.clone()).await.unwrap_err();
    assert_eq!(
        err,
        LedgerError::ForeignKey {
            field: "bank_id",
            code: "BANK_NOT_FOUND",
        }
    );

    let mut bad_user = data;
    bad_user.user_id = 999;
    let err = service.create(bad_user).await.unwrap_err();
    assert_eq!(
        err,
        LedgerError::ForeignKey {
            field: "user_id",
            code: "USER_NOT_FOUND",
        }
    );
}

#[tokio::test]
async fn existence_probe_follows_the_row_lifecycle() {
    let db = fresh_db().await;
    let repository = Repository::<banks::Descriptor>::new(db.clone());
    assert!(!repository.exists(1).await.unwrap());

    let service = Service::<banks::Descriptor>::new(db);
    let created = service
        .create(BankCreate {
            name: "Caixa".to_string(),
            description: None,
            active: None,
        })
        .await
        .unwrap();
    assert!(repository.exists(created.id).await.unwrap());

    assert!(service.delete(created.id).await.unwrap());
    assert!(!repository.exists(created.id).await.unwrap());
}

#[tokio::test]
async fn duplicate_household_membership_is_a_storage_conflict() {
    let db = fresh_db().await;
    let user_id = Service::<users::Descriptor>::new(db.clone())
        .create(user("12345678Z"))
        .await
        .unwrap()
        .id;
    let household_id = Service::<households::Descriptor>::new(db.clone())
        .create(HouseholdCreate {
            name: "Casa García".to_string(),
            address: None,
            active: None,
        })
        .await
        .unwrap()
        .id;
    let service = Service::<household_members::Descriptor>::new(db);

    let membership = HouseholdMemberCreate {
        role: HouseholdRole::Wife,
        active: None,
        household_id,
        user_id,
    };
    let first = service.create(membership.clone()).await.unwrap();
    assert_eq!(first.household_id, household_id);
    assert_eq!(first.user_id, user_id);

    // A user joins a household at most once; the unique index rejects
    // the second row.
    let err = service.create(membership).await.unwrap_err();
    assert!(matches!(err, LedgerError::Database(_)));
}
