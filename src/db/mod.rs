//! Database layer for punchlog.
//!
//! SQLite persistence for the event log. The schema is versioned through
//! [`migrations`], which run every time a connection is opened.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchlog::db::events::Events;
//!
//! let rows = Events::new()?.fetch_all()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Testing Support
//!
//! The database file lives in the per-user data directory, so tests point
//! `HOME` (or `LOCALAPPDATA` on Windows) at a temporary directory to get a
//! fresh database.

/// Core database connection and initialization module.
pub mod db;

/// Clock event log and synced rows.
pub mod events;

/// Database schema migration system.
pub mod migrations;
