//! Palabra Server - A bilingual Spanish/English dictionary over HTTP
//!
//! This binary wires the SQL-backed word store to the HTTP interface:
//! parse configuration, connect and synchronize the schema, then serve
//! the API and the client page until interrupted.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use palabra_core::SqlStore;
use palabra_server::app::{self, AppState, HealthInfo};
use palabra_server::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let dialect = config.dialect()?;
    let url = config.database_url()?;

    let store = SqlStore::connect(dialect, &url)
        .await
        .context("failed to connect to the database")?;
    store
        .sync_schema()
        .await
        .context("failed to synchronize the words table")?;
    info!(%dialect, db = %config.db_name, "database ready");

    let state = AppState::new(
        Arc::new(store),
        HealthInfo {
            dialect: dialect.to_string(),
            host: config.db_host.clone(),
            db: config.db_name.clone(),
        },
    );
    let router = app::router(state, &config.allow_origin);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("API ready on http://localhost:{}", config.port);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        return;
    }
    info!("interrupt received, draining connections");
}
