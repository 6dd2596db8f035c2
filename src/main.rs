//! # User Registry
//!
//! Binary entry point: parses [`HttpServerConfig`], starts the [`UserSystem`] and serves
//! HTTP until Ctrl-C.

use clap::Parser;
use tracing::{error, info};
use user_registry::http::{HttpServer, HttpServerConfig};
use user_registry::lifecycle::{setup_tracing, UserSystem};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = HttpServerConfig::parse();
    info!(?config, "Starting user registry");

    let system = if config.no_seed {
        UserSystem::empty(config.buffer_size())
    } else {
        UserSystem::new(config.buffer_size())?
    };

    let server = HttpServer::new(config, system.user_client.clone());
    if let Err(e) = server.start(shutdown_signal()).await {
        error!(error = %e, "HTTP server failed");
        system.shutdown().await?;
        return Err(e.into());
    }

    system.shutdown().await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
    }
    info!("Shutdown signal received");
}
