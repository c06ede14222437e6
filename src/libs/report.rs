//! Turns a [`ReportSummary`] into presentable shapes.
//!
//! - an HTML fragment (per-day totals and a grand total) for mail bodies
//! - grid rows for spreadsheet-style display and export
//! - the status text stored on a `REPORTED` checkpoint row
//!
//! None of these touch the summary they are given. The two builders at the
//! top pick the rows a report covers and run them through reconstruction and
//! aggregation.

use crate::libs::checkpoint::since_checkpoint;
use crate::libs::error::PunchResult;
use crate::libs::event::LogEvent;
use crate::libs::session::{Reconstruct, Vocabulary};
use crate::libs::summary::{ReportSummary, SummaryCalculator, SummaryFormatter};
use crate::libs::window::TimeWindow;
use crate::libs::zone::ReportZone;
use chrono::{DateTime, Utc};

pub const NO_SESSIONS: &str = "No completed work sessions in this period.";

/// Column titles of the grid shape. The first column is always blank; grids
/// consumed by the sheet frontend expect the marker column to be there.
pub const GRID_HEADER: [&str; 5] = ["", "Date", "Time In", "Time Out", "Duration"];

pub type GridRow = [String; 5];

/// Local rows since the last checkpoint, and the checkpoint itself.
pub fn checkpoint_report(events: &[LogEvent], zone: &ReportZone) -> PunchResult<(DateTime<Utc>, ReportSummary)> {
    let (from, rows) = since_checkpoint(events);
    let summary = rows.reconstruct(Vocabulary::Local, zone)?.summarize()?;
    Ok((from, summary))
}

/// Rows inside `window`, read with the given vocabulary. Checkpoints play no
/// part here.
pub fn window_report(events: &[LogEvent], window: &TimeWindow, vocabulary: Vocabulary, zone: &ReportZone) -> PunchResult<ReportSummary> {
    window.filter(events).reconstruct(vocabulary, zone)?.summarize()
}

pub fn render_html(summary: &ReportSummary) -> PunchResult<String> {
    if summary.is_empty() {
        return Ok(format!("<p>{}</p>", NO_SESSIONS));
    }

    let (daily, total) = summary.format_summary()?;
    let mut html = String::from("<table style=\"border-collapse: collapse;\">\n");
    html.push_str("  <tr><th style=\"text-align: left;\">Date</th><th style=\"text-align: right;\">Hours</th></tr>\n");
    for (date, duration) in &daily {
        html.push_str(&format!(
            "  <tr><td>{}</td><td style=\"text-align: right;\">{}</td></tr>\n",
            escape_html(date),
            duration
        ));
    }
    html.push_str(&format!(
        "  <tr><td><strong>Total</strong></td><td style=\"text-align: right;\"><strong>{}</strong></td></tr>\n",
        total
    ));
    html.push_str("</table>");
    Ok(html)
}

/// Header row followed by one row per session, in session order.
pub fn grid_rows(summary: &ReportSummary) -> Vec<GridRow> {
    let mut rows = Vec::with_capacity(summary.sessions.len() + 1);
    rows.push(GRID_HEADER.map(String::from));
    for session in &summary.sessions {
        rows.push([
            String::new(),
            session.date.clone(),
            session.time_in.clone(),
            session.time_out.clone(),
            session.duration.clone(),
        ]);
    }
    rows
}

/// Status text for a `REPORTED` row: the window it closes and its total.
pub fn checkpoint_status(from: DateTime<Utc>, to: DateTime<Utc>, summary: &ReportSummary, zone: &ReportZone) -> PunchResult<String> {
    let (_, total) = summary.format_summary()?;
    Ok(format!("{} - {} | total {}", zone.date_time(from), zone.date_time(to), total))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::formatter::format_duration;
    use crate::libs::session::{Reconstruction, Session};
    use crate::libs::summary::SummaryCalculator;
    use chrono::TimeZone;

    fn summary() -> ReportSummary {
        let session = |date: &str, ms: i64| Session {
            date: date.to_string(),
            time_in: "09:00:00".to_string(),
            time_out: "17:00:00".to_string(),
            duration_ms: ms,
            duration: format_duration(ms).unwrap(),
        };
        Reconstruction {
            sessions: vec![session("2024-06-02", 3_600_000), session("2024-06-01", 27_000_000)],
            total_ms: 30_600_000,
        }
        .summarize()
        .unwrap()
    }

    #[test]
    fn test_html_lists_days_in_order_then_total() {
        let html = render_html(&summary()).unwrap();
        let first = html.find("2024-06-01").unwrap();
        let second = html.find("2024-06-02").unwrap();
        let total = html.find("Total").unwrap();
        assert!(first < second && second < total);
        assert!(html.contains("07:30:00"));
        assert!(html.contains("08:30:00"));
    }

    #[test]
    fn test_html_fallback_when_empty() {
        let html = render_html(&ReportSummary::default()).unwrap();
        assert_eq!(html, format!("<p>{}</p>", NO_SESSIONS));
    }

    #[test]
    fn test_grid_has_blank_marker_column() {
        let rows = grid_rows(&summary());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], GRID_HEADER.map(String::from));
        assert!(rows.iter().all(|row| row[0].is_empty()));
        assert_eq!(rows[1][1], "2024-06-02");
        assert_eq!(rows[2][4], "07:30:00");
    }

    #[test]
    fn test_checkpoint_status_text() {
        let from = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 6, 2, 18, 0, 0).unwrap();
        let status = checkpoint_status(from, to, &summary(), &ReportZone::utc()).unwrap();
        assert_eq!(status, "2024-06-01 09:00:00 - 2024-06-02 18:00:00 | total 08:30:00");
    }

    #[test]
    fn test_checkpoint_report_starts_after_marker() {
        let at = |h: u32| Utc.with_ymd_and_hms(2024, 6, 1, h, 0, 0).unwrap();
        let events = vec![
            LogEvent::new(at(8), "IN", ""),
            LogEvent::new(at(9), "OUT", ""),
            LogEvent::new(at(10), "REPORTED", "done"),
            LogEvent::new(at(11), "IN", ""),
            LogEvent::new(at(13), "OUT", ""),
        ];
        let (from, summary) = checkpoint_report(&events, &ReportZone::utc()).unwrap();
        assert_eq!(from, at(10));
        assert_eq!(summary.sessions.len(), 1);
        assert_eq!(summary.total_ms, 2 * 3_600_000);
    }

    #[test]
    fn test_window_report_uses_synced_vocabulary() {
        let at = |h: u32| Utc.with_ymd_and_hms(2024, 6, 1, h, 0, 0).unwrap();
        let events = vec![
            LogEvent::new(at(8), "CLOCK_IN", ""),
            LogEvent::new(at(12), "CLOCK_OUT", ""),
            LogEvent::new(at(14), "IN", ""),
            LogEvent::new(at(15), "OUT", ""),
        ];
        let window = TimeWindow::new(Some(at(7)), Some(at(16)), at(23));
        let summary = window_report(&events, &window, Vocabulary::Synced, &ReportZone::utc()).unwrap();
        assert_eq!(summary.sessions.len(), 1);
        assert_eq!(summary.total_ms, 4 * 3_600_000);
    }
}
