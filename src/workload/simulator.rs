//! Delay and loop-count generation plus the cancellable sleep.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use crate::lifecycle::ShutdownSignal;
use crate::workload::error::WorkError;
use crate::workload::random::RandomSource;

/// Upper bound (exclusive) of a simulated delay, in milliseconds.
pub const MAX_DELAY_MS: u32 = 200;

/// Inclusive lower bound of the `/zig` iteration count.
pub const MIN_LOOP_COUNT: u32 = 2;

/// Width of the iteration count range; counts fall in `[2, 12)`.
pub const LOOP_COUNT_SPAN: u32 = 10;

#[derive(Clone)]
pub struct WorkloadSimulator {
    random: Arc<dyn RandomSource>,
}

impl WorkloadSimulator {
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Uniform delay in `[0, 200)` milliseconds.
    pub fn next_delay(&self) -> u64 {
        u64::from(self.random.next_below(MAX_DELAY_MS))
    }

    /// Iteration count in `[2, 12)`.
    pub fn next_loop_count(&self) -> u32 {
        MIN_LOOP_COUNT + self.random.next_below(LOOP_COUNT_SPAN)
    }

    /// Sleep for `duration_ms`, returning early with
    /// [`WorkError::InterruptedWait`] if `cancel` fires first.
    ///
    /// Dropping the returned future also abandons the wait.
    pub async fn sleep(&self, duration_ms: u64, cancel: &ShutdownSignal) -> Result<(), WorkError> {
        let started = Instant::now();
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                let waited_ms = started.elapsed().as_millis() as u64;
                tracing::debug!(requested_ms = duration_ms, waited_ms, "Simulated wait interrupted");
                Err(WorkError::InterruptedWait {
                    requested_ms: duration_ms,
                    waited_ms,
                })
            }
            _ = tokio::time::sleep(Duration::from_millis(duration_ms)) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::Shutdown;
    use crate::workload::random::{SeededRandom, ThreadRandom};

    #[test]
    fn test_delay_in_range() {
        let sim = WorkloadSimulator::new(Arc::new(ThreadRandom));
        for _ in 0..5_000 {
            assert!(sim.next_delay() < 200);
        }
    }

    #[test]
    fn test_loop_count_in_range() {
        let sim = WorkloadSimulator::new(Arc::new(SeededRandom::new(7)));
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..5_000 {
            let n = sim.next_loop_count();
            assert!((2..12).contains(&n), "loop count {} out of range", n);
            seen_min |= n == 2;
            seen_max |= n == 11;
        }
        assert!(seen_min && seen_max);
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_completes() {
        let sim = WorkloadSimulator::new(Arc::new(ThreadRandom));
        let start = Instant::now();
        sim.sleep(150, &ShutdownSignal::never()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(150));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sleep_interrupted() {
        let sim = WorkloadSimulator::new(Arc::new(ThreadRandom));
        let shutdown = Shutdown::new();
        let signal = shutdown.subscribe();

        let task = tokio::spawn(async move { sim.sleep(180, &signal).await });
        tokio::time::sleep(Duration::from_millis(40)).await;
        shutdown.trigger();

        let err = task.await.unwrap().unwrap_err();
        match err {
            WorkError::InterruptedWait { requested_ms, waited_ms } => {
                assert_eq!(requested_ms, 180);
                assert!(waited_ms >= 40 && waited_ms < 180);
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_sleep_with_pending_cancel_reports_interrupt() {
        let sim = WorkloadSimulator::new(Arc::new(ThreadRandom));
        let shutdown = Shutdown::new();
        shutdown.trigger();
        let res = sim.sleep(0, &shutdown.subscribe()).await;
        assert!(matches!(res, Err(WorkError::InterruptedWait { waited_ms: 0, .. })));
    }
}
