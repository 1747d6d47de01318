//! HTTP header echo service.
//!
//! A diagnostic endpoint for checking what a proxy or load balancer forwards.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────▶ trace ─▶ HSTS ─▶ timeout ─▶ admission ─▶ echo handler
//!                                              │
//!                                              └─▶ 403 "HTTPS required"
//! ```

use header_echo::config::load_config;
use header_echo::http::server;
use header_echo::lifecycle::signals;
use header_echo::observability::logging;
use header_echo::{HttpServer, Shutdown};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    logging::init(&config.observability);

    tracing::info!("header-echo v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.socket_addr(),
        request_timeout_secs = config.timeouts.request_secs,
        log_format = ?config.observability.log_format,
        "Configuration loaded"
    );

    let listener = server::bind(&config.listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_handler(shutdown);

    HttpServer::new(config).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
