//! Locates the "last reported" point in the event log.
//!
//! A report run may append a `REPORTED` row; the next report only covers the
//! rows from that point on. The lookup is a plain backward linear scan so the
//! latest marker always wins, whatever rows follow it.

use crate::libs::event::LogEvent;
use chrono::{DateTime, Utc};

/// Returns the instant the next "since last report" window starts at.
///
/// 1. the latest `REPORTED` row with a readable timestamp,
/// 2. otherwise the first row with a readable timestamp,
/// 3. otherwise the Unix epoch.
pub fn last_checkpoint(events: &[LogEvent]) -> DateTime<Utc> {
    events
        .iter()
        .rev()
        .filter(|event| event.is_checkpoint())
        .find_map(LogEvent::instant)
        .or_else(|| events.iter().find_map(LogEvent::instant))
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Rows at or after the checkpoint, in storage order.
///
/// The comparison is inclusive so that, with no marker yet, the first row of
/// the log (which is the checkpoint) is part of the window.
pub fn since_checkpoint(events: &[LogEvent]) -> (DateTime<Utc>, Vec<LogEvent>) {
    let checkpoint = last_checkpoint(events);
    let window = events
        .iter()
        .filter(|event| event.instant().is_some_and(|at| at >= checkpoint))
        .cloned()
        .collect();
    (checkpoint, window)
}
