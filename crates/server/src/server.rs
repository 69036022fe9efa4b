//! Router assembly and server lifecycle.

use axum::{Router, routing::get};
use sea_orm::DatabaseConnection;

use ledger::{
    EntityDescriptor, accounts, banks, expense_categories, expenses, financial_summaries,
    household_members, households, income_categories, incomes, investment_categories,
    investment_logs, investments, saving_logs, savings, sources, users,
};

use crate::crud;

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

/// The five uniform routes of one entity, mounted under its segment.
fn resource<D: EntityDescriptor>() -> Router<ServerState> {
    Router::new()
        .route(
            &format!("/{}", D::SEGMENT),
            get(crud::list::<D>).post(crud::create::<D>),
        )
        .route(
            &format!("/{}/{{id}}", D::SEGMENT),
            get(crud::get_one::<D>)
                .patch(crud::update::<D>)
                .delete(crud::remove::<D>),
        )
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(resource::<users::Descriptor>())
        .merge(resource::<households::Descriptor>())
        .merge(resource::<household_members::Descriptor>())
        .merge(resource::<banks::Descriptor>())
        .merge(resource::<accounts::Descriptor>())
        .merge(resource::<sources::Descriptor>())
        .merge(resource::<expense_categories::Descriptor>())
        .merge(resource::<income_categories::Descriptor>())
        .merge(resource::<investment_categories::Descriptor>())
        .merge(resource::<expenses::Descriptor>())
        .merge(resource::<incomes::Descriptor>())
        .merge(resource::<savings::Descriptor>())
        .merge(resource::<saving_logs::Descriptor>())
        .merge(resource::<investments::Descriptor>())
        .merge(resource::<investment_logs::Descriptor>())
        .merge(resource::<financial_summaries::Descriptor>())
        .with_state(state)
}

pub async fn run(db: DatabaseConnection) {
    let listener = match tokio::net::TcpListener::bind("127.0.0.1:3000").await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return;
        }
    };
    if let Err(err) = run_with_listener(db, listener).await {
        tracing::error!("server failed: {err}");
    }
}

pub async fn run_with_listener(
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState { db };
    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    db: DatabaseConnection,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(db, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
