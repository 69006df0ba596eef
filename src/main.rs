//! Latency demo service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌────────────────────────────────────────────────┐
//!     ────────────────────────┼─▶ http::server (request id, trace, timeout)    │
//!                             │        │                                       │
//!                             │        ▼                                       │
//!                             │   http::handlers  /plain  /ping  /zig          │
//!                             │        │                                       │
//!                             │        ▼                                       │
//!                             │   workload::simulator ──▶ cancellable sleep    │
//!                             │   workload::recorder  ──▶ observability::Tracer│
//!                             │        │                                       │
//!                             │        ▼                                       │
//!                             │   observability::Meter ──▶ do_work_ms          │
//!                             │                                                │
//!                             │   lifecycle: SIGINT/SIGTERM ─▶ interrupt work  │
//!                             └────────────────────────────────────────────────┘
//! ```

use latency_demo::config;
use latency_demo::lifecycle::startup;
use latency_demo::observability::logging::init_logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_from_env()?;

    init_logging(&config.observability);
    tracing::info!("latency-demo v{} starting", env!("CARGO_PKG_VERSION"));

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
