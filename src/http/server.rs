//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the six endpoint handlers
//! - Wire up middleware (request ID, tracing)
//! - Build the shared, read-only application state
//! - Bind server to listener and stop on shutdown

use axum::{routing::any, Router};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, TimeoutConfig};
use crate::external::{ExternalApi, ExternalError};
use crate::http::{handlers, request};
use crate::lifecycle::{Dependencies, ShutdownSignal};
use crate::noise::NanoClock;
use crate::store::{DocumentStore, Handle, RelationalStore};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub document_store: Handle<dyn DocumentStore>,
    pub relational_store: Handle<dyn RelationalStore>,
    pub external: ExternalApi,
    pub clock: Arc<NanoClock>,
    pub timeouts: TimeoutConfig,
    pub slow_delay: Duration,
}

/// HTTP server exposing the demo endpoints.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server from configuration and whatever startup produced.
    pub fn new(config: AppConfig, deps: Dependencies) -> Result<Self, ExternalError> {
        let external = ExternalApi::new(
            &config.endpoints.external_url,
            config.timeouts.external_request,
        )?;

        let state = AppState {
            document_store: deps.document_store,
            relational_store: deps.relational_store,
            external,
            clock: Arc::new(NanoClock::new()),
            timeouts: config.timeouts.clone(),
            slow_delay: config.endpoints.slow_delay,
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/hello", any(handlers::hello))
            .route("/noisy", any(handlers::noisy))
            .route("/slow", any(handlers::slow))
            .route("/mongo", any(handlers::mongo))
            .route("/external", any(handlers::external))
            .route("/postgres", any(handlers::postgres))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                    .layer(TraceLayer::new_for_http().make_span_with(request::make_span))
                    .layer(PropagateRequestIdLayer::x_request_id()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownSignal,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            slow_delay = ?self.config.endpoints.slow_delay,
            external_url = %self.config.endpoints.external_url,
            "Server is ready and listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.recv())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
