//! Demo service binary.
//!
//! # Startup
//!
//! ```text
//!  logging ─▶ config (env) ─▶ boot delay ─▶ connect mongo ┐
//!                                         ─▶ connect pg   ┴▶ bind :8080 ─▶ serve
//! ```
//!
//! Datastore failures are logged and the server starts anyway; the affected
//! endpoints answer 500 until the process is restarted.

use tokio::net::TcpListener;

use demo_service::config::load_config;
use demo_service::http::HttpServer;
use demo_service::lifecycle::{self, signals, Shutdown};
use demo_service::observability::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    tracing::info!("demo-service v{} starting", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        startup_delay = ?config.startup.delay,
        slow_delay = ?config.endpoints.slow_delay,
        "Configuration loaded"
    );

    let deps = lifecycle::initialize(&config).await;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    let server = HttpServer::new(config, deps)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
