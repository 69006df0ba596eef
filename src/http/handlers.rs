//! Endpoint handlers.
//!
//! # Responsibilities
//! - `/plain`: sleep only
//! - `/ping`: one work span plus one `do_work_ms` sample
//! - `/zig`: 2 to 11 work spans sharing one delay, no sample

use std::sync::Arc;

use axum::extract::State;

use crate::lifecycle::ShutdownSignal;
use crate::observability::{Meter, Tracer};
use crate::workload::{
    Clock, RandomSource, SpanRecorder, SystemClock, ThreadRandom, WorkError, WorkUnit,
    WorkloadSimulator,
};

/// Span name used by `/ping`.
pub const SINGLE_WORK_SPAN: &str = "doSingleWork";

/// `method` label recorded by `/ping`.
pub const PING_METHOD: &str = "ping";

/// Handler logic shared by every request.
#[derive(Clone)]
pub struct WorkloadService {
    simulator: WorkloadSimulator,
    recorder: SpanRecorder,
    meter: Arc<dyn Meter>,
}

impl WorkloadService {
    /// Service drawing from the thread RNG and the host clock.
    pub fn new(tracer: Arc<dyn Tracer>, meter: Arc<dyn Meter>) -> Self {
        Self::builder(tracer, meter).build()
    }

    pub fn builder(tracer: Arc<dyn Tracer>, meter: Arc<dyn Meter>) -> WorkloadServiceBuilder {
        WorkloadServiceBuilder {
            tracer,
            meter,
            workload_random: Arc::new(ThreadRandom),
            attribute_random: Arc::new(ThreadRandom),
            clock: Arc::new(SystemClock),
        }
    }

    pub async fn plain(&self, cancel: &ShutdownSignal) -> Result<&'static str, WorkError> {
        let delay_ms = self.simulator.next_delay();
        tracing::debug!(delay_ms, "Handling /plain");
        self.simulator.sleep(delay_ms, cancel).await?;
        Ok("plain")
    }

    pub async fn ping(&self, cancel: &ShutdownSignal) -> Result<&'static str, WorkError> {
        let delay_ms = self.simulator.next_delay();
        tracing::debug!(delay_ms, "Handling /ping");

        let unit = WorkUnit::new(SINGLE_WORK_SPAN, 0, delay_ms);
        self.recorder.record_work(&unit, cancel).await?;
        self.meter.record_latency(PING_METHOD, delay_ms);
        Ok("pong")
    }

    pub async fn zig(&self, cancel: &ShutdownSignal) -> Result<&'static str, WorkError> {
        let delay_ms = self.simulator.next_delay();
        let loop_count = self.simulator.next_loop_count();
        tracing::debug!(delay_ms, loop_count, "Handling /zig");

        for i in 0..loop_count {
            let unit = WorkUnit::new(format!("doWorkAt-{}", i), i, delay_ms);
            self.recorder.record_work(&unit, cancel).await?;
        }
        Ok("zag")
    }
}

pub struct WorkloadServiceBuilder {
    tracer: Arc<dyn Tracer>,
    meter: Arc<dyn Meter>,
    workload_random: Arc<dyn RandomSource>,
    attribute_random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl WorkloadServiceBuilder {
    /// Source for delays and loop counts.
    pub fn workload_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.workload_random = random;
        self
    }

    /// Source for the `random-val` span attribute.
    pub fn attribute_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.attribute_random = random;
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn build(self) -> WorkloadService {
        let simulator = WorkloadSimulator::new(self.workload_random);
        let recorder = SpanRecorder::new(self.tracer, simulator.clone(), self.attribute_random, self.clock);
        WorkloadService {
            simulator,
            recorder,
            meter: self.meter,
        }
    }
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: WorkloadService,
    pub shutdown: ShutdownSignal,
}

pub async fn plain(State(state): State<AppState>) -> Result<&'static str, WorkError> {
    state.service.plain(&state.shutdown).await
}

pub async fn ping(State(state): State<AppState>) -> Result<&'static str, WorkError> {
    state.service.ping(&state.shutdown).await
}

pub async fn zig(State(state): State<AppState>) -> Result<&'static str, WorkError> {
    state.service.zig(&state.shutdown).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;
    use crate::observability::{HistogramSample, RecordingMeter, RecordingTracer};
    use crate::workload::{DayOfWeek, FixedClock, SequenceRandom};
    use std::time::Duration;

    struct Harness {
        tracer: Arc<RecordingTracer>,
        meter: Arc<RecordingMeter>,
        service: WorkloadService,
    }

    fn harness(sequence: Vec<u32>) -> Harness {
        let tracer = Arc::new(RecordingTracer::new());
        let meter = Arc::new(RecordingMeter::new());
        let service = WorkloadService::builder(tracer.clone(), meter.clone())
            .workload_random(Arc::new(SequenceRandom::new(sequence)))
            .attribute_random(Arc::new(SequenceRandom::new(vec![42])))
            .clock(Arc::new(FixedClock(DayOfWeek::Saturday)))
            .build();
        Harness {
            tracer,
            meter,
            service,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ping_records_span_and_sample() {
        let h = harness(vec![37]);
        let body = h.service.ping(&ShutdownSignal::never()).await.unwrap();

        assert_eq!(body, "pong");
        let spans = h.tracer.spans();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].name, "doSingleWork");
        assert_eq!(spans[0].attributes.loop_count, 0);
        assert_eq!(spans[0].attributes.random_val, 42);
        assert_eq!(spans[0].attributes.day_of_week, DayOfWeek::Saturday);
        assert_eq!(h.tracer.closed_count(), 1);
        assert_eq!(
            h.meter.samples(),
            vec![HistogramSample {
                method: "ping".into(),
                value_millis: 37
            }]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_zig_loops_with_shared_delay() {
        // delay 50, loop count 2 + 1
        let h = harness(vec![50, 1]);
        let start = tokio::time::Instant::now();
        let body = h.service.zig(&ShutdownSignal::never()).await.unwrap();

        assert_eq!(body, "zag");
        assert!(start.elapsed() >= Duration::from_millis(150));
        let spans = h.tracer.spans();
        let names: Vec<&str> = spans.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["doWorkAt-0", "doWorkAt-1", "doWorkAt-2"]);
        let loops: Vec<u32> = spans.iter().map(|s| s.attributes.loop_count).collect();
        assert_eq!(loops, vec![0, 1, 2]);
        assert_eq!(h.tracer.closed_count(), 3);
        assert!(h.meter.samples().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_plain_emits_nothing() {
        let h = harness(vec![199]);
        let body = h.service.plain(&ShutdownSignal::never()).await.unwrap();

        assert_eq!(body, "plain");
        assert_eq!(h.tracer.opened_count(), 0);
        assert!(h.meter.samples().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_repeated_pings_accumulate_samples_only() {
        let h = harness(vec![10, 20, 30]);
        for _ in 0..3 {
            h.service.ping(&ShutdownSignal::never()).await.unwrap();
        }

        let values: Vec<u64> = h.meter.samples().iter().map(|s| s.value_millis).collect();
        assert_eq!(values, vec![10, 20, 30]);
        assert!(h.tracer.spans().iter().all(|s| s.name == "doSingleWork" && s.attributes.loop_count == 0));
        assert_eq!(h.tracer.opened_count(), h.tracer.closed_count());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zig_stops_at_interruption() {
        // delay 100, loop count 2 + 9
        let h = harness(vec![100, 9]);
        let shutdown = Shutdown::new();
        let signal = shutdown.subscribe();
        let service = h.service.clone();

        let task = tokio::spawn(async move { service.zig(&signal).await });
        tokio::time::sleep(Duration::from_millis(250)).await;
        shutdown.trigger();

        let res = task.await.unwrap();
        assert!(matches!(res, Err(WorkError::InterruptedWait { .. })));
        assert_eq!(h.tracer.opened_count(), 3);
        assert_eq!(h.tracer.closed_count(), 3);
        assert!(h.meter.samples().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_interrupted_ping_records_no_sample() {
        let h = harness(vec![120]);
        let shutdown = Shutdown::new();
        shutdown.trigger();

        let res = h.service.ping(&shutdown.subscribe()).await;
        assert!(res.is_err());
        assert_eq!(h.tracer.opened_count(), 1);
        assert_eq!(h.tracer.closed_count(), 1);
        assert!(h.meter.samples().is_empty());
    }
}
