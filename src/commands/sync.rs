use super::parse_timestamp;
use crate::{
    db::events::Events,
    libs::{
        config::Config,
        ingest::parse_payload,
        messages::Message,
        report::window_report,
        session::Vocabulary,
        view::View,
        window::TimeWindow,
    },
    msg_bail_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct SyncArgs {
    /// JSON payload from the external client; replaces the stored synced rows
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Window start (default: the epoch)
    #[arg(long, value_parser = parse_timestamp)]
    from: Option<DateTime<Utc>>,

    /// Window end (default: now)
    #[arg(long, value_parser = parse_timestamp)]
    to: Option<DateTime<Utc>>,
}

pub fn cmd(args: SyncArgs) -> Result<()> {
    let events = Events::new()?;

    if let Some(path) = &args.file {
        let imported = import(&events, path)?;
        msg_success!(Message::SyncImported(imported));
    }

    let rows = events.fetch_synced()?;
    if rows.is_empty() {
        msg_info!(Message::NoSyncedRows);
        return Ok(());
    }

    let zone = Config::read()?.zone()?;
    let window = TimeWindow::new(args.from, args.to, Utc::now());
    let summary = window_report(&rows, &window, Vocabulary::Synced, &zone)?;

    msg_print!(Message::SyncHeader(zone.date_time(window.start), zone.date_time(window.end)), true);
    if summary.is_empty() {
        msg_info!(Message::NoSessions);
    } else {
        View::sessions(&summary)?;
        View::daily_totals(&summary)?;
    }

    Ok(())
}

/// Reads a payload file and swaps it in as the synced rows.
///
/// A payload that does not parse leaves the stored rows as they were.
pub fn import(events: &Events, path: &Path) -> Result<usize> {
    let payload = fs::read_to_string(path)?;
    let rows = match parse_payload(&payload) {
        Ok(rows) => rows,
        Err(e) => msg_bail_anyhow!(Message::SyncPayloadRejected(e.to_string())),
    };
    events.replace_synced(&rows)
}
