use crate::libs::error::PunchResult;
use crate::libs::formatter::{format_duration, parse_duration};
use crate::libs::session::{Reconstruction, Session};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTotal {
    /// `YYYY-MM-DD`, so sorting the keys as strings sorts them by date.
    pub date: String,
    pub total_ms: i64,
}

/// Everything a report needs, recomputed on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub sessions: Vec<Session>,
    pub total_ms: i64,
    pub daily_totals: Vec<DailyTotal>,
}

impl ReportSummary {
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

pub trait SummaryCalculator {
    /// Groups sessions by date key and sums each group's durations.
    ///
    /// Daily sums are taken from the formatted `HH:MM:SS` strings, so every
    /// session counts in whole seconds. The grand total is the reconstructor's
    /// own figure.
    fn summarize(self) -> PunchResult<ReportSummary>;
}

impl SummaryCalculator for Reconstruction {
    fn summarize(self) -> PunchResult<ReportSummary> {
        let mut per_day: BTreeMap<String, i64> = BTreeMap::new();
        for session in &self.sessions {
            *per_day.entry(session.date.clone()).or_insert(0) += parse_duration(&session.duration)?;
        }

        Ok(ReportSummary {
            sessions: self.sessions,
            total_ms: self.total_ms,
            daily_totals: per_day.into_iter().map(|(date, total_ms)| DailyTotal { date, total_ms }).collect(),
        })
    }
}

pub trait SummaryFormatter {
    /// `(date, HH:MM:SS)` per day and the formatted grand total.
    fn format_summary(&self) -> PunchResult<(Vec<(String, String)>, String)>;
}

impl SummaryFormatter for ReportSummary {
    fn format_summary(&self) -> PunchResult<(Vec<(String, String)>, String)> {
        let daily = self
            .daily_totals
            .iter()
            .map(|day| Ok((day.date.clone(), format_duration(day.total_ms)?)))
            .collect::<PunchResult<Vec<_>>>()?;

        Ok((daily, format_duration(self.total_ms)?))
    }
}
