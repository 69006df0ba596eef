//! Wall clock abstraction for the day-of-week attribute.

use chrono::{Datelike, Local};

use crate::workload::unit::DayOfWeek;

pub trait Clock: Send + Sync {
    /// Current local day of the week.
    fn today(&self) -> DayOfWeek;
}

/// Reads the host clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> DayOfWeek {
        Local::now().weekday().into()
    }
}

/// Always reports the same day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DayOfWeek);

impl Clock for FixedClock {
    fn today(&self) -> DayOfWeek {
        self.0
    }
}
