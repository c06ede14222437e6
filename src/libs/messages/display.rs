//! Text for every [`Message`] variant.
//!
//! All wording is kept in this one match so commands and library code only
//! ever refer to variants.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let s = match self {
            // === CLOCK MESSAGES ===
            Message::ClockedIn(time) => format!("Clocked in at {}", time),
            Message::ClockedOut(time) => format!("Clocked out at {}", time),
            Message::BreakStarted(time) => format!("Break started at {}", time),
            Message::BreakEnded(time) => format!("Back to work at {}", time),
            Message::AlreadyClockedIn => "You are already clocked in".to_string(),
            Message::NotClockedIn => "You are not clocked in".to_string(),
            Message::AlreadyOnBreak => "You are already on a break".to_string(),
            Message::NotOnBreak => "You are not on a break".to_string(),

            // === STATUS MESSAGES ===
            Message::StatusClockedOut => "Status: clocked out".to_string(),
            Message::StatusWorking => "Status: working".to_string(),
            Message::StatusOnBreak => "Status: on a break".to_string(),
            Message::LastCheckpoint(time) => format!("Last report checkpoint: {}", time),

            // === REPORT MESSAGES ===
            Message::ReportHeader(since) => format!("Work report since {}", since),
            Message::NoLogData => "No log data available".to_string(),
            Message::NoSessions => "No sessions found".to_string(),
            Message::HtmlWritten(path) => format!("HTML report written to {}", path),
            Message::CheckpointRecorded(status) => format!("Report checkpoint recorded: {}", status),
            Message::MarkWhileClockedIn => "Still clocked in; clock out before recording a report checkpoint".to_string(),

            // === SYNC MESSAGES ===
            Message::SyncHeader(from, to) => format!("Synced sessions from {} to {}", from, to),
            Message::SyncImported(count) => format!("Imported {} synced rows", count),
            Message::SyncPayloadRejected(reason) => format!("Sync payload rejected, stored rows kept: {}", reason),
            Message::NoSyncedRows => "No synced rows stored".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingData(kind, format) => format!("Exporting {} as {}...", kind, format),
            Message::ExportCompleted(path) => format!("Data exported to {}", path),
            Message::ExportEmpty => "Nothing to export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigWizardHeader => "punchlog configuration".to_string(),
            Message::PromptTimezone => "Report time zone (IANA name, empty for host zone)".to_string(),
            Message::PromptExportDir => "Default export directory (empty for working directory)".to_string(),
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
        };
        write!(f, "{}", s)
    }
}
