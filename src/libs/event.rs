//! Log rows and the action vocabulary they carry.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::fmt;

/// Text stored in place of a timestamp the external source did not send.
pub const CORRUPT_TIMESTAMP: &str = "CORRUPT_TIMESTAMP";
/// Text stored in place of an action the external source did not send.
pub const ACTION_MISSING: &str = "ACTION_MISSING";

const NAIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Timestamp cell of a log row.
///
/// Rows that arrive from outside may carry text that is not a date at all;
/// that text is kept verbatim instead of being rejected, and every consumer
/// skips such rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stamp {
    At(DateTime<Utc>),
    Raw(String),
}

impl Stamp {
    /// Parses RFC 3339 first, then `YYYY-MM-DD HH:MM:SS` read as UTC.
    /// Anything else becomes [`Stamp::Raw`].
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if let Ok(at) = DateTime::parse_from_rfc3339(trimmed) {
            return Stamp::At(at.with_timezone(&Utc));
        }
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, NAIVE_FORMAT) {
            return Stamp::At(naive.and_utc());
        }
        Stamp::Raw(text.to_string())
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Stamp::At(at) => Some(*at),
            Stamp::Raw(_) => None,
        }
    }

    /// Storage form: RFC 3339 for instants, the original text otherwise.
    pub fn to_db_string(&self) -> String {
        match self {
            Stamp::At(at) => at.to_rfc3339(),
            Stamp::Raw(text) => text.clone(),
        }
    }
}

impl From<DateTime<Utc>> for Stamp {
    fn from(at: DateTime<Utc>) -> Self {
        Stamp::At(at)
    }
}

/// Actions the local clock commands write, plus the report checkpoint.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    In,
    Out,
    BreakOut,
    BreakIn,
    Reported,
}

impl Action {
    pub fn token(&self) -> &'static str {
        match self {
            Action::In => "IN",
            Action::Out => "OUT",
            Action::BreakOut => "BREAK-OUT",
            Action::BreakIn => "BREAK-IN",
            Action::Reported => "REPORTED",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// One row of the event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEvent {
    pub timestamp: Stamp,
    pub action: String,
    pub status: String,
}

impl LogEvent {
    pub fn new(timestamp: impl Into<Stamp>, action: &str, status: &str) -> Self {
        LogEvent {
            timestamp: timestamp.into(),
            action: action.to_string(),
            status: status.to_string(),
        }
    }

    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.timestamp.instant()
    }

    pub fn is_checkpoint(&self) -> bool {
        self.action == Action::Reported.token()
    }
}
