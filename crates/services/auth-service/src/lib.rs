//! Auth Service Library
//!
//! Credential registration and cookie-based session login over HTTP,
//! backed by a PostgreSQL user store.
//!
//! # Layers
//!
//! - **config**: Environment-driven configuration
//! - **clock**: Injectable time source
//! - **repository**: User store (SeaORM)
//! - **infra**: Database connection and migrations
//! - **service**: Registrar, session issuer and token helper
//! - **api**: Axum handlers, extractors and routes

pub mod api;
pub mod clock;
pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use tracing::info;

use crate::api::{create_router, AppState};
use crate::clock::SystemClock;
use crate::config::AuthServiceConfig;
use crate::infra::Database;
use crate::repository::UserStore;
use crate::service::Authenticator;

pub use crate::infra::MigrateAction;

/// Connect to the user store and serve HTTP until the server stops.
pub async fn run_server(config: AuthServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect_and_migrate(&config.database.url).await?;

    let users = Arc::new(UserStore::new(db.connection()));
    let auth_service = Arc::new(Authenticator::new(users, &config, Arc::new(SystemClock)));

    let app = create_router(AppState::new(auth_service));

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("{} listening on {}", config.server.service_name, addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    action: MigrateAction,
    config: AuthServiceConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::connect(&config.database.url).await?;

    for state in db.migrate(action).await? {
        info!("{}", state);
    }
    info!("Migration {:?} finished", action);

    Ok(())
}
