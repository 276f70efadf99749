//! # Blog API Server
//!
//! The main entry point for the Actix-web HTTP server.

use anyhow::Context;

mod config;
mod handlers;
mod middleware;
mod observability;
mod serialize;
mod server;
mod state;
mod telemetry;

use config::AppConfig;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    telemetry::init_telemetry(&TelemetryConfig::from_env());

    // Load configuration
    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Blog API Server on {}:{}",
        config.host,
        config.port
    );

    let server = server::run_server(&config)
        .await
        .context("failed to start server")?;
    tracing::info!(addr = %server.local_addr(), "Accepting connections, press Ctrl-C to stop");

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;

    server.close().await.context("failed to shut down cleanly")?;
    Ok(())
}
