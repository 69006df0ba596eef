//! Wraps one unit of simulated work in a span.

use std::sync::Arc;

use tracing::Instrument;

use crate::lifecycle::ShutdownSignal;
use crate::observability::{SpanGuard, Tracer};
use crate::workload::clock::Clock;
use crate::workload::error::WorkError;
use crate::workload::random::RandomSource;
use crate::workload::simulator::WorkloadSimulator;
use crate::workload::unit::{SpanAttributes, WorkUnit};

#[derive(Clone)]
pub struct SpanRecorder {
    tracer: Arc<dyn Tracer>,
    simulator: WorkloadSimulator,
    random: Arc<dyn RandomSource>,
    clock: Arc<dyn Clock>,
}

impl SpanRecorder {
    pub fn new(
        tracer: Arc<dyn Tracer>,
        simulator: WorkloadSimulator,
        random: Arc<dyn RandomSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            tracer,
            simulator,
            random,
            clock,
        }
    }

    /// Attributes for a span opened now at `loop_index`.
    pub fn attributes_for(&self, loop_index: u32) -> SpanAttributes {
        SpanAttributes {
            loop_count: loop_index,
            random_val: self.random.next_below(SpanAttributes::RANDOM_VAL_BOUND),
            day_of_week: self.clock.today(),
        }
    }

    /// Run `unit` inside its own span.
    ///
    /// The span closes before this returns, including when the sleep is
    /// interrupted or the future is dropped mid-wait.
    pub async fn record_work(&self, unit: &WorkUnit, cancel: &ShutdownSignal) -> Result<(), WorkError> {
        let attributes = self.attributes_for(unit.loop_index);
        let guard = SpanGuard::open(self.tracer.clone(), unit.span_name.as_str(), &attributes);

        async {
            self.simulator.sleep(unit.sleep_duration_millis, cancel).await?;
            tracing::info!("A sample log message!");
            Ok::<(), WorkError>(())
        }
        .instrument(guard.span().clone())
        .await
    }
}
