use anyhow::Result;
use dotenvy::dotenv;
use tracing::{info, warn};

mod auth;
mod catalog;
mod classify;
mod config;
mod http;
mod llm;
mod sampling;
mod stages;
mod state;
mod utils;

use config::Config;
use state::AppState;
use utils::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::load()?;
    let _logging_guards = init_logging(&config.log_level);

    if config.cloudflare_credentials().is_none() {
        warn!("Cloudflare credentials not configured; every stage will serve fallback data");
    }

    let bind_address = config.bind_address.clone();
    let state = AppState::new(config);
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Stylist server listening on {}", bind_address);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", err);
        return;
    }
    info!("Shutdown signal received");
}
