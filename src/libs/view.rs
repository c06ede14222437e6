use super::report::grid_rows;
use super::summary::{ReportSummary, SummaryFormatter};
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Per-day totals followed by the grand total.
    pub fn daily_totals(summary: &ReportSummary) -> Result<()> {
        let (daily, total) = summary.format_summary()?;
        let mut table = Table::new();

        table.add_row(row!["DATE", "HOURS"]);
        for (date, duration) in daily {
            table.add_row(row![date, r->duration]);
        }
        table.add_row(row![b->"TOTAL", br->total]);
        table.printstd();

        Ok(())
    }

    /// One line per session, in the same shape the grid export writes.
    pub fn sessions(summary: &ReportSummary) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "DATE", "TIME IN", "TIME OUT", "DURATION"]);
        // The first grid row is the header.
        for (index, [_, date, time_in, time_out, duration]) in grid_rows(summary).into_iter().skip(1).enumerate() {
            table.add_row(row![index + 1, date, time_in, time_out, r->duration]);
        }
        table.printstd();

        Ok(())
    }
}
