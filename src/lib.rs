//! # punchlog - clock event log and work session reports
//!
//! A command-line time tracker that records clock events in an append-only
//! log and rebuilds work sessions from it on demand.
//!
//! ## Features
//!
//! - **Clocking**: `in`, `break`, `resume` and `out` append timestamped rows
//! - **Session Reconstruction**: pairs start and stop events into sessions,
//!   subtracting breaks
//! - **Checkpoint Reports**: reports cover everything since the last
//!   `REPORTED` row and can record a new one
//! - **Synced Reports**: rows pushed by an external client are filtered by a
//!   time window and reconstructed with their own vocabulary
//! - **Data Export**: sessions and daily totals as CSV, JSON or Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchlog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
