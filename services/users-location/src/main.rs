use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod mapper;
mod models;
mod repositories;
mod routes;
mod schema;
mod seed;
mod service;
mod state;

use common::database::{DatabaseConfig, health_check, init_pool};

use crate::{
    config::ServerConfig,
    repositories::{PgLocationRepository, PgUserRepository},
    seed::SeedOutcome,
    service::UserLocationService,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting users-location service");

    let server_config = ServerConfig::from_env()?;

    // Initialize database connection pool
    let db_config = DatabaseConfig::from_env()?;
    let pool = init_pool(&db_config).await?;

    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    schema::ensure_schema(&pool).await?;

    // Initialize repositories
    let location_repository = PgLocationRepository::new(pool.clone());
    let user_repository = Arc::new(PgUserRepository::new(pool));

    match seed::seed(
        server_config.seed_mode,
        &location_repository,
        user_repository.as_ref(),
    )
    .await?
    {
        SeedOutcome::Seeded {
            location_id,
            user_ids,
        } => info!(location_id, ?user_ids, "Seed data inserted"),
        SeedOutcome::Skipped => info!(mode = ?server_config.seed_mode, "Skipping seed data"),
    }

    let service = UserLocationService::new(user_repository);
    let app = routes::create_router(AppState::new(service));

    let bind_address = server_config.bind_address();
    let listener = TcpListener::bind(&bind_address).await?;
    info!("Users-location service listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutting down users-location service");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
