//! File export of reconstructed sessions.
//!
//! Two data shapes can be written, each as CSV, JSON or an Excel workbook:
//!
//! - **Grid**: the header row and one row per session, the same columns the
//!   sheet frontend consumes.
//! - **Summary**: per-day totals and the grand total.
//!
//! The exporter only formats what it is given. Choosing rows (checkpoint or
//! window) is the caller's job.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchlog::libs::export::{ExportData, ExportFormat, Exporter};
//! use punchlog::libs::summary::ReportSummary;
//!
//! let summary = ReportSummary::default();
//! let exporter = Exporter::new(ExportFormat::Csv, Some("sessions.csv".into()));
//! exporter.export(ExportData::Grid, &summary)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::libs::report::{grid_rows, GridRow};
use crate::libs::summary::{ReportSummary, SummaryFormatter};
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// One row per session.
    Grid,
    /// Per-day totals and the grand total.
    Summary,
}

impl fmt::Display for ExportData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportData::Grid => write!(f, "sessions"),
            ExportData::Summary => write!(f, "summary"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExportSession {
    pub date: String,
    pub time_in: String,
    pub time_out: String,
    pub duration: String,
}

#[derive(Debug, Serialize)]
pub struct ExportDay {
    pub date: String,
    pub hours: String,
}

#[derive(Debug, Serialize)]
pub struct ExportSummary {
    pub days: Vec<ExportDay>,
    pub total_hours: String,
    pub sessions: usize,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named after the current local time.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "punchlog_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, data: ExportData, summary: &ReportSummary) -> Result<()> {
        match data {
            ExportData::Grid => self.export_grid(summary)?,
            ExportData::Summary => self.export_summary(summary)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_grid(&self, summary: &ReportSummary) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.write_grid_csv(&grid_rows(summary)),
            ExportFormat::Excel => self.write_grid_excel(&grid_rows(summary)),
            ExportFormat::Json => {
                let sessions: Vec<ExportSession> = summary
                    .sessions
                    .iter()
                    .map(|s| ExportSession {
                        date: s.date.clone(),
                        time_in: s.time_in.clone(),
                        time_out: s.time_out.clone(),
                        duration: s.duration.clone(),
                    })
                    .collect();
                self.write_json(&sessions)
            }
        }
    }

    fn export_summary(&self, summary: &ReportSummary) -> Result<()> {
        let data = gather_summary(summary)?;
        match self.format {
            ExportFormat::Csv => self.write_summary_csv(&data),
            ExportFormat::Json => self.write_json(&data),
            ExportFormat::Excel => self.write_summary_excel(&data),
        }
    }

    fn write_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_grid_csv(&self, rows: &[GridRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn write_summary_csv(&self, summary: &ExportSummary) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Date", "Hours"])?;
        for day in &summary.days {
            wtr.write_record([&day.date, &day.hours])?;
        }

        wtr.write_record(["", ""])?;
        wtr.write_record(["Total", &summary.total_hours])?;
        wtr.write_record(["Sessions", &summary.sessions.to_string()])?;

        wtr.flush()?;
        Ok(())
    }

    fn write_grid_excel(&self, rows: &[GridRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if r == 0 {
                    worksheet.write_string_with_format(r as u32, c as u16, cell, &header_format)?;
                } else {
                    worksheet.write_string(r as u32, c as u16, cell)?;
                }
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn write_summary_excel(&self, summary: &ExportSummary) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        let total_format = Format::new().set_bold();

        worksheet.write_string_with_format(0, 0, "Date", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Hours", &header_format)?;

        let mut row = 1;
        for day in &summary.days {
            worksheet.write_string(row, 0, &day.date)?;
            worksheet.write_string(row, 1, &day.hours)?;
            row += 1;
        }

        row += 1;
        worksheet.write_string_with_format(row, 0, "Total", &total_format)?;
        worksheet.write_string_with_format(row, 1, &summary.total_hours, &total_format)?;
        row += 1;
        worksheet.write_string(row, 0, "Sessions")?;
        worksheet.write_number(row, 1, summary.sessions as f64)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

fn gather_summary(summary: &ReportSummary) -> Result<ExportSummary> {
    let (daily, total_hours) = summary.format_summary()?;
    Ok(ExportSummary {
        days: daily.into_iter().map(|(date, hours)| ExportDay { date, hours }).collect(),
        total_hours,
        sessions: summary.sessions.len(),
    })
}
