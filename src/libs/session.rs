//! Rebuilds completed work sessions from an ordered event log.
//!
//! Two vocabularies feed the same state machine:
//!
//! - **Local** rows written by the clock commands: `IN`, `BREAK-OUT` (or the
//!   older `BREAK`), `BREAK-IN`, `OUT`. Break time is excluded from the
//!   session's working time.
//! - **Synced** rows imported from the external client: `CLOCK_IN`,
//!   `CLOCK_OUT`. Any break rows in that source are ignored and the duration
//!   is the plain wall-clock difference.
//!
//! Rows are consumed in storage order, never re-sorted by timestamp. A row
//! whose timestamp is not an instant is skipped without touching state.
//!
//! Unmatched rows are dropped silently: a close with nothing open emits
//! nothing, and a session still open when the rows run out never shows up in
//! the report. Missed clock-outs therefore vanish instead of spanning days.

use crate::libs::error::PunchResult;
use crate::libs::event::LogEvent;
use crate::libs::formatter::format_duration;
use crate::libs::zone::ReportZone;
use crate::msg_debug;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which action tokens drive the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    Local,
    Synced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Open,
    Pause,
    Resume,
    Close,
}

impl Vocabulary {
    fn transition(&self, action: &str) -> Option<Transition> {
        match (self, action) {
            (Vocabulary::Local, "IN") => Some(Transition::Open),
            (Vocabulary::Local, "BREAK-OUT" | "BREAK") => Some(Transition::Pause),
            (Vocabulary::Local, "BREAK-IN") => Some(Transition::Resume),
            (Vocabulary::Local, "OUT") => Some(Transition::Close),
            (Vocabulary::Synced, "CLOCK_IN") => Some(Transition::Open),
            (Vocabulary::Synced, "CLOCK_OUT") => Some(Transition::Close),
            _ => None,
        }
    }
}

/// A completed work period, already formatted for the report zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Date of the opening row, `YYYY-MM-DD`.
    pub date: String,
    pub time_in: String,
    pub time_out: String,
    /// Working time; breaks between open and close are not counted.
    pub duration_ms: i64,
    /// `duration_ms` as `HH:MM:SS`.
    pub duration: String,
}

/// Sessions in the order their closing rows appear, plus the grand total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconstruction {
    pub sessions: Vec<Session>,
    pub total_ms: i64,
}

/// The session currently being tracked.
///
/// `working_since` is `None` while on a break.
struct OpenSession {
    opened_at: DateTime<Utc>,
    working_since: Option<DateTime<Utc>>,
    worked_ms: i64,
}

impl OpenSession {
    fn start(at: DateTime<Utc>) -> Self {
        OpenSession {
            opened_at: at,
            working_since: Some(at),
            worked_ms: 0,
        }
    }

    fn stop_working(&mut self, at: DateTime<Utc>) {
        if let Some(since) = self.working_since.take() {
            self.worked_ms += at.signed_duration_since(since).num_milliseconds();
        }
    }
}

/// Session reconstruction over a sequence of log rows.
pub trait Reconstruct {
    /// Runs the state machine and returns every session closed in the rows.
    ///
    /// Fails with `InvalidDuration` only when a session's working time comes
    /// out negative, which means the rows were written out of order.
    fn reconstruct(&self, vocabulary: Vocabulary, zone: &ReportZone) -> PunchResult<Reconstruction>;
}

impl Reconstruct for [LogEvent] {
    fn reconstruct(&self, vocabulary: Vocabulary, zone: &ReportZone) -> PunchResult<Reconstruction> {
        let mut result = Reconstruction::default();
        let mut open: Option<OpenSession> = None;

        for event in self {
            let Some(at) = event.instant() else {
                msg_debug!(format!("Skipping row with unreadable timestamp {:?}", event.timestamp));
                continue;
            };
            let Some(transition) = vocabulary.transition(&event.action) else {
                continue;
            };

            match transition {
                Transition::Open => open = Some(OpenSession::start(at)),
                Transition::Pause => {
                    if let Some(session) = open.as_mut() {
                        session.stop_working(at);
                    }
                }
                Transition::Resume => {
                    if let Some(session) = open.as_mut() {
                        session.working_since = Some(at);
                    }
                }
                Transition::Close => {
                    // Always back to idle, even when nothing was open.
                    if let Some(mut session) = open.take() {
                        session.stop_working(at);
                        let closed = Session {
                            date: zone.date_key(session.opened_at),
                            time_in: zone.clock_time(session.opened_at),
                            time_out: zone.clock_time(at),
                            duration_ms: session.worked_ms,
                            duration: format_duration(session.worked_ms)?,
                        };
                        msg_debug!(format!("Session {} {}-{} ({})", closed.date, closed.time_in, closed.time_out, closed.duration));
                        result.total_ms += closed.duration_ms;
                        result.sessions.push(closed);
                    } else {
                        msg_debug!(format!("Dropping {} with no open session", event.action));
                    }
                }
            }
        }

        if open.is_some() {
            msg_debug!("Discarding session left open at the end of the log");
        }

        Ok(result)
    }
}
