use super::parse_timestamp;
use crate::{
    db::events::Events,
    libs::{
        config::Config,
        export::{ExportData, ExportFormat, Exporter},
        messages::Message,
        report::{checkpoint_report, window_report},
        session::Vocabulary,
        window::TimeWindow,
    },
    msg_info,
};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(value_enum, default_value = "grid")]
    data: ExportData,

    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export synced rows instead of the local log
    #[arg(long)]
    synced: bool,

    /// Window start; with --to, replaces the checkpoint window
    #[arg(long, value_parser = parse_timestamp)]
    from: Option<DateTime<Utc>>,

    #[arg(long, value_parser = parse_timestamp)]
    to: Option<DateTime<Utc>>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let zone = config.zone()?;
    let events = Events::new()?;

    // Synced rows carry no checkpoints, so they are always windowed.
    let summary = if args.synced || args.from.is_some() || args.to.is_some() {
        let (rows, vocabulary) = if args.synced {
            (events.fetch_synced()?, Vocabulary::Synced)
        } else {
            (events.fetch_all()?, Vocabulary::Local)
        };
        let window = TimeWindow::new(args.from, args.to, Utc::now());
        window_report(&rows, &window, vocabulary, &zone)?
    } else {
        checkpoint_report(&events.fetch_all()?, &zone)?.1
    };

    if summary.is_empty() {
        msg_info!(Message::ExportEmpty);
    }

    msg_info!(Message::ExportingData(args.data.to_string(), args.format.to_string()));
    let exporter = Exporter::new(args.format, args.output.map(|path| config.export_path(path)));
    exporter.export(args.data, &summary)?;

    Ok(())
}
