//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the three workload endpoints
//! - Wire up middleware (tracing, timeout, request ID)
//! - Bind server to listener
//! - Drain in-flight requests on shutdown

use std::time::Duration;

use axum::{body::Body, http::Request, routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers::{self, AppState, WorkloadService};
use crate::http::request::{make_request_span, UuidRequestId};
use crate::lifecycle::ShutdownSignal;

/// HTTP server for the workload endpoints.
pub struct HttpServer {
    router: Router,
    shutdown: ShutdownSignal,
}

impl HttpServer {
    /// Create a new HTTP server.
    ///
    /// `shutdown` both stops the accept loop and interrupts in-flight work.
    pub fn new(config: ServiceConfig, service: WorkloadService, shutdown: ShutdownSignal) -> Self {
        let state = AppState {
            service,
            shutdown: shutdown.clone(),
        };
        let router = Self::build_router(&config, state);
        Self { router, shutdown }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/plain", get(handlers::plain))
            .route("/ping", get(handlers::ping))
            .route("/zig", get(handlers::zig))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| make_request_span(request)))
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
    }

    /// A handle to the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let shutdown = self.shutdown.clone();
        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("Draining in-flight requests");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
