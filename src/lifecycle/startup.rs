//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize the metrics exporter
//! - Wire production telemetry into the workload service
//! - Bind the listener and serve until a stop signal arrives
//!
//! # Design Decisions
//! - A broken metrics setup is logged, not fatal
//! - Listener starts last (traffic only when ready)

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::ServiceConfig;
use crate::http::{HttpServer, WorkloadService};
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals;
use crate::observability::metrics::init_metrics;
use crate::observability::{PrometheusMeter, TracingTracer};

/// Run the service until SIGINT/SIGTERM, then drain and return.
pub async fn run(config: ServiceConfig) -> Result<(), std::io::Error> {
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => {
                if let Err(e) = init_metrics(addr) {
                    tracing::error!(error = %e, "Metrics exporter unavailable");
                }
            }
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    let service = WorkloadService::new(Arc::new(TracingTracer), Arc::new(PrometheusMeter));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, service, shutdown.subscribe());

    let serve = server.run(listener);
    tokio::pin!(serve);

    tokio::select! {
        res = &mut serve => return res,
        _ = signals::forward_signals(&shutdown) => {}
    }

    serve.await
}
