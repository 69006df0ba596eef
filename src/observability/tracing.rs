//! Span emission.
//!
//! # Responsibilities
//! - Define the `Tracer` capability handed to request handlers
//! - Open work spans carrying `loop-count`, `random-val`, `day-of-week`
//! - Close every opened span exactly once through [`SpanGuard`]
//!
//! # Design Decisions
//! - Spans are `tracing` spans; `otel.name` carries the dynamic span name
//! - Closing is tied to `Drop`, so early returns and dropped futures close too

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::workload::SpanAttributes;

/// Capability for opening and closing named work spans.
pub trait Tracer: Send + Sync {
    /// Open a span and return the handle that nested work should run inside.
    fn start_span(&self, name: &str, attributes: &SpanAttributes) -> tracing::Span;

    /// Called exactly once per `start_span` when the span closes.
    fn end_span(&self, name: &str, elapsed: Duration);
}

/// Production tracer backed by the global `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingTracer;

impl Tracer for TracingTracer {
    fn start_span(&self, name: &str, attributes: &SpanAttributes) -> tracing::Span {
        tracing::info_span!(
            target: "latency_demo::work",
            "work",
            otel.name = %name,
            "loop-count" = attributes.loop_count,
            "random-val" = attributes.random_val,
            "day-of-week" = attributes.day_of_week.as_str(),
        )
    }

    fn end_span(&self, name: &str, elapsed: Duration) {
        tracing::debug!(
            target: "latency_demo::work",
            span = %name,
            elapsed_ms = elapsed.as_millis() as u64,
            "Span closed"
        );
    }
}

/// Scope guard owning one open span.
///
/// Dropping the guard ends the span, whichever way the enclosing scope exits.
pub struct SpanGuard {
    tracer: Arc<dyn Tracer>,
    name: String,
    span: tracing::Span,
    opened_at: Instant,
}

impl SpanGuard {
    pub fn open(tracer: Arc<dyn Tracer>, name: impl Into<String>, attributes: &SpanAttributes) -> Self {
        let name = name.into();
        let span = tracer.start_span(&name, attributes);
        Self {
            tracer,
            name,
            span,
            opened_at: Instant::now(),
        }
    }

    /// The span to make current while the guarded work runs.
    pub fn span(&self) -> &tracing::Span {
        &self.span
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for SpanGuard {
    fn drop(&mut self) {
        self.tracer.end_span(&self.name, self.opened_at.elapsed());
    }
}
