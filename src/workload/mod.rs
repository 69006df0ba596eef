//! Synthetic workload subsystem.
//!
//! # Data Flow
//! ```text
//! Handler
//!     → simulator.rs (draw delay / loop count, cancellable sleep)
//!     → recorder.rs (open span, attach attributes, sleep inside it, close)
//!         → random.rs (random-val attribute)
//!         → clock.rs (day-of-week attribute)
//! ```
//!
//! # Design Decisions
//! - Randomness and the wall clock are injected, never read from globals
//! - Spans are closed by a guard's `Drop`, so every exit path closes them
//! - Cancellation surfaces as `WorkError::InterruptedWait`

pub mod clock;
pub mod error;
pub mod random;
pub mod recorder;
pub mod simulator;
pub mod unit;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::WorkError;
pub use random::{RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use recorder::SpanRecorder;
pub use simulator::WorkloadSimulator;
pub use unit::{DayOfWeek, SpanAttributes, WorkUnit};
