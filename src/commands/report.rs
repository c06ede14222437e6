use crate::{
    db::events::Events,
    libs::{
        config::Config,
        event::Action,
        messages::Message,
        report::{checkpoint_report, checkpoint_status, render_html},
        state::ClockState,
        summary::ReportSummary,
        view::View,
        zone::ReportZone,
    },
    msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Also write the report as an HTML fragment to this file
    #[arg(long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Record a checkpoint so the next report starts after this one
    #[arg(long)]
    mark: bool,
}

pub fn cmd(args: ReportArgs) -> Result<()> {
    let events = Events::new()?;
    let rows = events.fetch_all()?;
    if rows.is_empty() {
        msg_info!(Message::NoLogData);
        return Ok(());
    }

    let config = Config::read()?;
    let zone = config.zone()?;
    let (from, summary) = checkpoint_report(&rows, &zone)?;

    msg_print!(Message::ReportHeader(zone.date_time(from)), true);
    if summary.is_empty() {
        msg_info!(Message::NoSessions);
    } else {
        View::sessions(&summary)?;
        View::daily_totals(&summary)?;
    }

    if let Some(path) = args.html {
        let path = config.export_path(path);
        fs::write(&path, render_html(&summary)?)?;
        msg_success!(Message::HtmlWritten(path.display().to_string()));
    }

    if args.mark {
        if let Some(status) = mark(&events, from, Utc::now(), &summary, &zone)? {
            msg_success!(Message::CheckpointRecorded(status));
        }
    }

    Ok(())
}

/// Appends a `REPORTED` row closing the window `[from, to]`.
///
/// Refused while clocked in: the open session is not in this report, and its
/// `OUT` would land after the checkpoint with nothing to pair with.
/// Returns the recorded status text, or `None` when refused.
pub fn mark(events: &Events, from: DateTime<Utc>, to: DateTime<Utc>, summary: &ReportSummary, zone: &ReportZone) -> Result<Option<String>> {
    if ClockState::read()?.clocked_in {
        msg_warning!(Message::MarkWhileClockedIn);
        return Ok(None);
    }

    let status = checkpoint_status(from, to, summary, zone)?;
    events.append(to.into(), Action::Reported.token(), &status)?;
    Ok(Some(status))
}
