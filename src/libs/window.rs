//! Explicit `[start, end]` windows over the event log.
//!
//! Used by the synced report, which is bounded by the caller's range instead
//! of the last checkpoint.

use crate::libs::event::LogEvent;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Missing start is the Unix epoch, missing end is `now`.
    /// Reversed bounds are swapped rather than rejected.
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        let start = start.unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        let end = end.unwrap_or(now);
        if start > end {
            TimeWindow { start: end, end: start }
        } else {
            TimeWindow { start, end }
        }
    }

    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at <= self.end
    }

    /// Rows whose timestamp falls inside the window, bounds included.
    pub fn filter(&self, events: &[LogEvent]) -> Vec<LogEvent> {
        events
            .iter()
            .filter(|event| event.instant().is_some_and(|at| self.contains(at)))
            .cloned()
            .collect()
    }
}
