//! Domain errors raised by the session engine and its inputs.
//!
//! Plumbing code (database, files, prompts) uses `anyhow::Result`; the pure
//! report pipeline returns `PunchError` so callers can match on the kind.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PunchError {
    /// A duration below zero reached the formatter.
    ///
    /// This only happens when an upstream computation is wrong, for example a
    /// working segment whose end precedes its start.
    #[error("Invalid duration: {0} ms is negative")]
    InvalidDuration(i64),

    #[error("Malformed duration text: '{0}' (expected HH:MM:SS)")]
    MalformedDuration(String),

    #[error("Malformed sync payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid timestamp: '{0}' (expected RFC 3339 or YYYY-MM-DD HH:MM:SS)")]
    InvalidTimestamp(String),

    #[error("Unknown time zone: '{0}'")]
    UnknownTimezone(String),
}

pub type PunchResult<T> = Result<T, PunchError>;
