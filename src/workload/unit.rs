//! Values describing one piece of simulated work.

use std::fmt;

use chrono::Weekday;

/// One simulated task. Lives only until its span closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkUnit {
    pub span_name: String,
    pub loop_index: u32,
    pub sleep_duration_millis: u64,
}

impl WorkUnit {
    pub fn new(span_name: impl Into<String>, loop_index: u32, sleep_duration_millis: u64) -> Self {
        Self {
            span_name: span_name.into(),
            loop_index,
            sleep_duration_millis,
        }
    }
}

/// Day of the week, rendered with the canonical upper-case names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "MONDAY",
            DayOfWeek::Tuesday => "TUESDAY",
            DayOfWeek::Wednesday => "WEDNESDAY",
            DayOfWeek::Thursday => "THURSDAY",
            DayOfWeek::Friday => "FRIDAY",
            DayOfWeek::Saturday => "SATURDAY",
            DayOfWeek::Sunday => "SUNDAY",
        }
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes attached to a work span when it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanAttributes {
    pub loop_count: u32,
    pub random_val: u32,
    pub day_of_week: DayOfWeek,
}

impl SpanAttributes {
    /// Upper bound (exclusive) of `random_val`.
    pub const RANDOM_VAL_BOUND: u32 = 100;
}
