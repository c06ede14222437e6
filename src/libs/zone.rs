//! Time zone used to turn instants into report dates and clock times.

use crate::libs::error::{PunchError, PunchResult};
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Either the host's local zone or a named IANA zone from the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportZone {
    #[default]
    Host,
    Named(Tz),
}

impl ReportZone {
    /// Resolves the configured zone name; `None` keeps the host zone.
    pub fn from_config(name: Option<&str>) -> PunchResult<Self> {
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            None => Ok(ReportZone::Host),
            Some(name) => name
                .parse::<Tz>()
                .map(ReportZone::Named)
                .map_err(|_| PunchError::UnknownTimezone(name.to_string())),
        }
    }

    pub fn utc() -> Self {
        ReportZone::Named(Tz::UTC)
    }

    pub fn localize(&self, at: DateTime<Utc>) -> NaiveDateTime {
        match self {
            ReportZone::Host => at.with_timezone(&Local).naive_local(),
            ReportZone::Named(tz) => at.with_timezone(tz).naive_local(),
        }
    }

    /// `YYYY-MM-DD`; the string order of these keys is calendar order.
    pub fn date_key(&self, at: DateTime<Utc>) -> String {
        self.localize(at).format("%Y-%m-%d").to_string()
    }

    pub fn clock_time(&self, at: DateTime<Utc>) -> String {
        self.localize(at).format("%H:%M:%S").to_string()
    }

    pub fn date_time(&self, at: DateTime<Utc>) -> String {
        self.localize(at).format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
