//! Point-of-Sale API Server Binary
//!
//! This binary starts the HTTP display surface for the billing core.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (./store.db, INR, voice disabled)
//! cargo run --bin pos-api
//!
//! # Run with environment variables
//! POS_PORT=9000 POS_TRANSCRIBER_URL=http://localhost:5005/transcribe cargo run --bin pos-api
//! ```
//!
//! # Environment Variables
//!
//! * `POS_HOST` - Server host (default: 0.0.0.0)
//! * `POS_PORT` - Server port (default: 8080)
//! * `POS_DATABASE_URL` - SQLite connection string (default: sqlite://store.db)
//! * `POS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `POS_CURRENCY` - ISO currency code for all prices (default: INR)
//! * `POS_TRANSCRIBER_URL` - Speech-to-text endpoint; voice billing is off when unset
//! * `POS_TRANSCRIBER_API_KEY` - Bearer token for the speech-to-text endpoint
//! * `POS_TRANSCRIBER_TIMEOUT_SECS` - Speech-to-text timeout (default: 30)

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_billing::adapters::HttpTranscriber;
use domain_billing::BillingEngine;
use infra_db::{create_pool, ensure_schema, DatabaseConfig, SqliteStoreAdapter};
use interface_api::{config::ApiConfig, create_router};

/// Main entry point for the API server.
///
/// Initializes logging, loads configuration, opens the store, and starts the
/// HTTP server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("invalid POS_* configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting point-of-sale API server"
    );

    let currency = config.currency().context("invalid POS_CURRENCY")?;

    let pool = create_pool(DatabaseConfig::new(&config.database_url))
        .await
        .context("failed to open the store")?;
    ensure_schema(&pool).await.context("failed to prepare the schema")?;

    let store = Arc::new(SqliteStoreAdapter::new(pool, currency));
    let mut engine = BillingEngine::new(store, currency);

    match config.transcriber() {
        Some(settings) => {
            tracing::info!(endpoint = %settings.endpoint, "Voice billing enabled");
            engine = engine.with_transcriber(Arc::new(HttpTranscriber::new(settings)));
        }
        None => tracing::info!("Voice billing disabled: POS_TRANSCRIBER_URL is not set"),
    }

    let app = create_router(engine);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
