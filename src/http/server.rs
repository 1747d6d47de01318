//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the echo handlers
//! - Wire up the request pipeline (trace, HSTS, timeout, admission)
//! - Bind the listener and serve until shutdown

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    middleware,
    routing::{on, MethodFilter},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{EchoConfig, ListenerConfig};
use crate::http::echo::{echo_path, echo_root};
use crate::lifecycle::shutdown;
use crate::security::{enforce_https, hsts_layer};

/// Methods the echo routes answer; anything else gets 405.
pub const ECHO_METHODS: MethodFilter = MethodFilter::GET
    .or(MethodFilter::POST)
    .or(MethodFilter::PUT)
    .or(MethodFilter::DELETE)
    .or(MethodFilter::PATCH)
    .or(MethodFilter::HEAD)
    .or(MethodFilter::OPTIONS);

/// Error type for server operations.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind a TCP listener for the configured address.
pub async fn bind(config: &ListenerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.socket_addr();
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Wrap `routes` in the request pipeline.
///
/// Requests pass the stack top to bottom: trace → HSTS → timeout →
/// admission → handler. HSTS sits outside admission and the timeout so
/// 403s and 408s carry it.
#[allow(deprecated)]
fn with_pipeline(routes: Router, request_timeout: Duration) -> Router {
    let pipeline = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(hsts_layer())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(middleware::from_fn(enforce_https));

    routes.layer(pipeline)
}

/// HTTP server for the echo service.
pub struct HttpServer {
    router: Router,
    config: EchoConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: EchoConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &EchoConfig) -> Router {
        let routes = Router::new()
            .route("/", on(ECHO_METHODS, echo_root))
            .route("/{*path}", on(ECHO_METHODS, echo_path));

        with_pipeline(routes, Duration::from_secs(config.timeouts.request_secs))
    }

    /// Run the server on `listener` until `shutdown_rx` fires, then drain.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown_rx: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            request_timeout_secs = self.config.timeouts.request_secs,
            "HTTP server starting"
        );

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown::wait(shutdown_rx))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
