use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use sea_orm::{Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use serde_json::{Value, json};
use tower::ServiceExt;

use migration::MigratorTrait;
use server::{ServerState, router};

async fn app() -> (Router, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    (router(ServerState { db: db.clone() }), db)
}

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// POSTs and returns the created record's id.
async fn post_id(app: &Router, path: &str, body: Value) -> i64 {
    let (status, body) = send(app, "POST", path, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "seed POST {path} failed: {body}");
    body["response"]["id"].as_i64().unwrap()
}

fn user_payload(dni: &str) -> Value {
    json!({
        "name": "Ana",
        "surname1": "García",
        "dni": dni,
        "password": "Str0ng!pass",
    })
}

#[tokio::test]
async fn account_creation_returns_201_with_generated_id() {
    let (app, _db) = app().await;
    let user_id = post_id(&app, "/users", user_payload("12345678Z")).await;
    let bank_id = post_id(&app, "/banks", json!({ "name": "ING" })).await;

    let (status, body) = send(
        &app,
        "POST",
        "/accounts",
        Some(json!({
            "name": "Payroll",
            "iban": "ES0912345678901234567890",
            "balance": 1000.0,
            "bank_id": bank_id,
            "user_id": user_id,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["details"], "ACCOUNT_CREATED");
    assert!(body["response"]["id"].as_i64().unwrap() >= 1);
    assert_eq!(body["response"]["name"], "Payroll");
    assert_eq!(body["response"]["balance"], 1000.0);
}

#[tokio::test]
async fn dangling_category_is_rejected_and_nothing_persists() {
    let (app, db) = app().await;
    let user_id = post_id(&app, "/users", user_payload("12345678Z")).await;
    let source_id = post_id(&app, "/sources", json!({ "name": "Supermarket" })).await;

    let (status, body) = send(
        &app,
        "POST",
        "/expenses",
        Some(json!({
            "name": "Groceries",
            "amount": 12.5,
            "date": "2026-02-01",
            "currency": "€",
            "user_id": user_id,
            "source_id": source_id,
            "category_id": 999,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["response"], "FK_ERROR");
    assert_eq!(body["details"], "CATEGORY_NOT_FOUND");

    let rows = ledger::expenses::Entity::find().count(&db).await.unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn patch_changes_only_the_named_field() {
    let (app, _db) = app().await;
    let bank_id = post_id(&app, "/banks", json!({ "name": "ING" })).await;

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/banks/{bank_id}"),
        Some(json!({ "active": false })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["details"], "BANK_UPDATED");
    assert_eq!(body["response"]["name"], "ING");
    assert_eq!(body["response"]["active"], false);
}

#[tokio::test]
async fn deleting_a_missing_household_is_404() {
    let (app, _db) = app().await;

    let (status, body) = send(&app, "DELETE", "/households/3", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["response"], "HOUSEHOLD_NOT_FOUND");
    assert_eq!(body["details"], "NONE");
}

#[tokio::test]
async fn delete_then_get_is_404_and_body_is_empty_on_204() {
    let (app, _db) = app().await;
    let bank_id = post_id(&app, "/banks", json!({ "name": "ING" })).await;

    let (status, body) = send(&app, "DELETE", &format!("/banks/{bank_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", &format!("/banks/{bank_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["response"], "BANK_NOT_FOUND");
}

#[tokio::test]
async fn zero_amount_never_reaches_storage() {
    let (app, db) = app().await;

    // References are dangling too, but shape validation runs first and
    // wins without any storage access.
    let (status, body) = send(
        &app,
        "POST",
        "/expenses",
        Some(json!({
            "name": "Groceries",
            "amount": 0.0,
            "date": "2026-02-01",
            "currency": "€",
            "user_id": 1,
            "source_id": 1,
            "category_id": 1,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["response"], "VALIDATION_ERROR");
    assert!(body["details"].as_str().unwrap().contains("amount"));

    let rows = ledger::expenses::Entity::find().count(&db).await.unwrap();
    assert_eq!(rows, 0);
}

#[tokio::test]
async fn malformed_body_is_invalid_data() {
    let (app, _db) = app().await;

    let request = Request::builder()
        .method("POST")
        .uri("/banks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["response"], "INVALID_DATA");
}

#[tokio::test]
async fn duplicate_dni_is_a_409() {
    let (app, _db) = app().await;
    post_id(&app, "/users", user_payload("12345678Z")).await;

    let (status, body) = send(&app, "POST", "/users", Some(user_payload("12345678Z"))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["response"], "UNIQUENESS_ERROR");
    assert!(body["details"].as_str().unwrap().contains("12345678Z"));
}

#[tokio::test]
async fn listing_supports_search_filters() {
    let (app, _db) = app().await;
    post_id(&app, "/sources", json!({ "name": "Payroll", "kind": "income" })).await;
    post_id(&app, "/sources", json!({ "name": "Broker", "kind": "investment" })).await;

    let (status, body) = send(&app, "GET", "/sources", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["details"], "SOURCE_LIST");
    assert_eq!(body["response"].as_array().unwrap().len(), 2);

    let (status, body) = send(&app, "GET", "/sources?kind=income", None).await;
    assert_eq!(status, StatusCode::OK);
    let matches = body["response"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["name"], "Payroll");
}

#[tokio::test]
async fn currency_round_trips_as_its_symbol() {
    let (app, _db) = app().await;
    let user_id = post_id(&app, "/users", user_payload("12345678Z")).await;
    let source_id = post_id(&app, "/sources", json!({ "name": "Payroll" })).await;
    let category_id = post_id(&app, "/incomes_categories", json!({ "name": "Salary" })).await;

    let (status, body) = send(
        &app,
        "POST",
        "/incomes",
        Some(json!({
            "name": "February salary",
            "amount": 2100.0,
            "date": "2026-02-28",
            "currency": "€",
            "user_id": user_id,
            "source_id": source_id,
            "category_id": category_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["response"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/incomes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["details"], "INCOME_FOUND");
    assert_eq!(body["response"]["currency"], "€");
}

#[tokio::test]
async fn duplicate_household_membership_is_a_database_error() {
    let (app, _db) = app().await;
    let user_id = post_id(&app, "/users", user_payload("12345678Z")).await;
    let household_id = post_id(&app, "/households", json!({ "name": "Casa García" })).await;

    let membership = json!({
        "role": "wife",
        "household_id": household_id,
        "user_id": user_id,
    });
    let first = post_id(&app, "/household_members", membership.clone()).await;
    assert!(first > 0);

    // The same pair again trips the unique index; the driver message
    // stays out of the wire body.
    let (status, body) = send(&app, "POST", "/household_members", Some(membership)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["response"], "DATABASE_ERROR");
    assert_eq!(body["details"], "NONE");
}
