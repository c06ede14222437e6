//! Command-line interface and workflow entry points.
//!
//! Every subcommand lives in its own module with an `Args` struct (when it
//! takes any) and a `cmd` function. Commands run synchronously to completion.
//!
//! ## Available Commands
//!
//! - **Clocking**: `in`, `out`, `break`, `resume`
//! - **Inspection**: `status`
//! - **Reporting**: `report` (checkpoint window), `sync` (synced rows in an
//!   explicit window)
//! - **Export**: `export` to CSV, JSON or Excel
//! - **Configuration**: `init`

pub mod clock;
pub mod export;
pub mod init;
pub mod report;
pub mod status;
pub mod sync;

use crate::libs::error::PunchError;
use crate::libs::event::{Action, Stamp};
use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Clock in")]
    In,
    #[command(about = "Start a break")]
    Break,
    #[command(about = "End a break")]
    Resume,
    #[command(about = "Clock out")]
    Out,
    #[command(about = "Show clock state and the last report checkpoint")]
    Status,
    #[command(about = "Report sessions since the last checkpoint")]
    Report(report::ReportArgs),
    #[command(about = "Import synced rows and report them for a time window")]
    Sync(sync::SyncArgs),
    #[command(about = "Export sessions or daily totals to a file")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::In => clock::cmd(Action::In),
            Commands::Break => clock::cmd(Action::BreakOut),
            Commands::Resume => clock::cmd(Action::BreakIn),
            Commands::Out => clock::cmd(Action::Out),
            Commands::Status => status::cmd(),
            Commands::Report(args) => report::cmd(args),
            Commands::Sync(args) => sync::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Value parser for `--from` / `--to` style arguments.
///
/// Accepts anything a log timestamp accepts: RFC 3339, or
/// `YYYY-MM-DD HH:MM:SS` read as UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    match Stamp::parse(value) {
        Stamp::At(at) => Ok(at),
        Stamp::Raw(raw) => Err(PunchError::InvalidTimestamp(raw).to_string()),
    }
}
