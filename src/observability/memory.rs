//! In-memory tracer and meter.
//!
//! Both keep everything they are handed, which makes them suitable for
//! asserting on emitted telemetry.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use crate::observability::metrics::{HistogramSample, Meter};
use crate::observability::tracing::Tracer;
use crate::workload::SpanAttributes;

/// A span as it was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSpan {
    pub name: String,
    pub attributes: SpanAttributes,
}

#[derive(Debug, Default)]
pub struct RecordingTracer {
    opened: Mutex<Vec<RecordedSpan>>,
    closed: AtomicUsize,
}

impl RecordingTracer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opened spans, in opening order.
    pub fn spans(&self) -> Vec<RecordedSpan> {
        self.opened.lock().expect("tracer mutex poisoned").clone()
    }

    pub fn opened_count(&self) -> usize {
        self.opened.lock().expect("tracer mutex poisoned").len()
    }

    pub fn closed_count(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Tracer for RecordingTracer {
    fn start_span(&self, name: &str, attributes: &SpanAttributes) -> tracing::Span {
        self.opened
            .lock()
            .expect("tracer mutex poisoned")
            .push(RecordedSpan {
                name: name.to_string(),
                attributes: *attributes,
            });
        tracing::info_span!(target: "latency_demo::work", "work", otel.name = %name)
    }

    fn end_span(&self, _name: &str, _elapsed: Duration) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Default)]
pub struct RecordingMeter {
    samples: Mutex<Vec<HistogramSample>>,
}

impl RecordingMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> Vec<HistogramSample> {
        self.samples.lock().expect("meter mutex poisoned").clone()
    }
}

impl Meter for RecordingMeter {
    fn record_latency(&self, method: &str, value_millis: u64) {
        self.samples
            .lock()
            .expect("meter mutex poisoned")
            .push(HistogramSample {
                method: method.to_string(),
                value_millis,
            });
    }
}
