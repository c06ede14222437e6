//! Every user-facing message punchlog can print.
//!
//! Variants carry their dynamic parts as plain values; the wording lives in
//! [`super::display`].

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // === CLOCK MESSAGES ===
    ClockedIn(String),
    ClockedOut(String),
    BreakStarted(String),
    BreakEnded(String),
    AlreadyClockedIn,
    NotClockedIn,
    AlreadyOnBreak,
    NotOnBreak,

    // === STATUS MESSAGES ===
    StatusClockedOut,
    StatusWorking,
    StatusOnBreak,
    LastCheckpoint(String),

    // === REPORT MESSAGES ===
    ReportHeader(String), // checkpoint the report starts from
    NoLogData,
    NoSessions,
    HtmlWritten(String),
    CheckpointRecorded(String),
    MarkWhileClockedIn,

    // === SYNC MESSAGES ===
    SyncHeader(String, String), // window start, window end
    SyncImported(usize),
    SyncPayloadRejected(String),
    NoSyncedRows,

    // === EXPORT MESSAGES ===
    ExportingData(String, String), // data kind, format
    ExportCompleted(String),
    ExportEmpty,

    // === CONFIGURATION MESSAGES ===
    ConfigWizardHeader,
    PromptTimezone,
    PromptExportDir,
    ConfigSaved,
    ConfigDeleted,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
}
