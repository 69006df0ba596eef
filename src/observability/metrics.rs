//! Metrics collection and exposition.
//!
//! # Responsibilities
//! - Define the `Meter` capability handed to request handlers
//! - Record simulated work latency into the `do_work_ms` histogram
//! - Expose a Prometheus-compatible scrape endpoint
//!
//! # Metrics
//! - `do_work_ms` (histogram): simulated delay, labelled by `method`
//!
//! # Design Decisions
//! - Recording goes through the `metrics` facade; the exporter is global
//! - Histogram buckets cover the whole `[0, 200)` ms delay range

use std::net::SocketAddr;

use metrics::Unit;
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder};
use thiserror::Error;

/// Name of the work latency histogram.
pub const DO_WORK_HISTOGRAM: &str = "do_work_ms";

const DO_WORK_BUCKETS: &[f64] = &[5.0, 10.0, 25.0, 50.0, 75.0, 100.0, 125.0, 150.0, 175.0, 200.0];

/// One recorded histogram measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramSample {
    pub method: String,
    pub value_millis: u64,
}

/// Capability for recording work latency.
pub trait Meter: Send + Sync {
    fn record_latency(&self, method: &str, value_millis: u64);
}

/// Production meter writing through the `metrics` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrometheusMeter;

impl Meter for PrometheusMeter {
    fn record_latency(&self, method: &str, value_millis: u64) {
        metrics::histogram!(DO_WORK_HISTOGRAM, "method" => method.to_owned()).record(value_millis as f64);
    }
}

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("failed to build prometheus exporter: {0}")]
    Build(#[from] BuildError),
}

/// Exporter builder with the service's histogram buckets applied.
pub fn prometheus_builder() -> Result<PrometheusBuilder, MetricsError> {
    let builder = PrometheusBuilder::new()
        .set_buckets_for_metric(Matcher::Full(DO_WORK_HISTOGRAM.to_string()), DO_WORK_BUCKETS)?;
    Ok(builder)
}

/// Install the global recorder and serve `/metrics` on `addr`.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), MetricsError> {
    prometheus_builder()?.with_http_listener(addr).install()?;

    metrics::describe_histogram!(
        DO_WORK_HISTOGRAM,
        Unit::Milliseconds,
        "Duration of simulated work per endpoint"
    );

    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}
