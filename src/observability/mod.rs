//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handlers produce:
//!     → tracing.rs (work spans via the Tracer capability)
//!     → metrics.rs (latency samples via the Meter capability)
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stdout (fmt or JSON lines)
//!     → Metrics endpoint (Prometheus scrape)
//!     → memory.rs (in-process capture for assertions)
//! ```
//!
//! # Design Decisions
//! - Handlers receive `Arc<dyn Tracer>` / `Arc<dyn Meter>` at construction
//! - Production implementations sit on the `tracing` and `metrics` facades

pub mod logging;
pub mod memory;
pub mod metrics;
pub mod tracing;

pub use self::memory::{RecordedSpan, RecordingMeter, RecordingTracer};
pub use self::metrics::{HistogramSample, Meter, PrometheusMeter};
pub use self::tracing::{SpanGuard, Tracer, TracingTracer};
