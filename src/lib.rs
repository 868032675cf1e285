pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod observability;

use std::sync::Arc;

use anyhow::Result;
use infrastructure::{axum_http::http_serve, postgres::postgres_connection};
use tracing::info;

/// Expects the tracing subscriber to be installed already.
pub async fn run() -> Result<()> {
    let dotenvy_env = config::config_loader::load()?;
    info!(stage = %dotenvy_env.stage, "ENV has been loaded");

    let postgres_pool = postgres_connection::establish_connection(&dotenvy_env.database)?;
    info!("Postgres connection has been established");

    postgres_connection::run_migrations(&postgres_pool)?;

    http_serve::start(Arc::new(dotenvy_env), Arc::new(postgres_pool)).await?;

    Ok(())
}
