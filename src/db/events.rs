//! Append-only storage for clock events and synced rows.
//!
//! Two tables share one shape:
//!
//! - `events` holds rows written by the local clock commands and report
//!   checkpoints; nothing is ever updated or deleted there.
//! - `synced_events` holds the rows last imported from the external client;
//!   every import swaps its whole contents in one transaction.
//!
//! Rows are read back in insertion order. Timestamps are stored as text so a
//! value that never was a date comes back as [`Stamp::Raw`] instead of failing
//! the read.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchlog::db::events::Events;
//! use punchlog::libs::event::Action;
//! use chrono::Utc;
//!
//! let events = Events::new()?;
//! events.append(Utc::now().into(), Action::In.token(), "")?;
//! let rows = events.fetch_all()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::libs::event::{LogEvent, Stamp};
use anyhow::Result;
use parking_lot::Mutex;
use rusqlite::{params, Connection, Row};
use std::sync::Arc;

const INSERT_EVENT: &str = "INSERT INTO events (timestamp, action, status) VALUES (?1, ?2, ?3)";
const SELECT_EVENTS: &str = "SELECT timestamp, action, status FROM events ORDER BY id";
const INSERT_SYNCED: &str = "INSERT INTO synced_events (timestamp, action, status) VALUES (?1, ?2, ?3)";
const SELECT_SYNCED: &str = "SELECT timestamp, action, status FROM synced_events ORDER BY id";
const DELETE_SYNCED: &str = "DELETE FROM synced_events";

/// Event log store.
///
/// The connection sits behind a mutex so every append goes through a single
/// writer, and a read sees a log no append interleaves with.
pub struct Events {
    pub conn: Arc<Mutex<Connection>>,
}

impl Events {
    pub fn new() -> Result<Events> {
        let db_conn = Db::new()?.conn;

        Ok(Events {
            conn: Arc::new(Mutex::new(db_conn)),
        })
    }

    /// Appends one row to the local log.
    pub fn append(&self, timestamp: Stamp, action: &str, status: &str) -> Result<()> {
        let conn_guard = self.conn.lock();
        conn_guard.execute(INSERT_EVENT, params![timestamp.to_db_string(), action, status])?;
        Ok(())
    }

    /// Every local row, oldest insertion first.
    pub fn fetch_all(&self) -> Result<Vec<LogEvent>> {
        self.select(SELECT_EVENTS)
    }

    /// Replaces the synced rows with `rows`, all or nothing.
    pub fn replace_synced(&self, rows: &[LogEvent]) -> Result<usize> {
        let mut conn_guard = self.conn.lock();
        let tx = conn_guard.transaction()?;
        tx.execute(DELETE_SYNCED, [])?;
        {
            let mut stmt = tx.prepare(INSERT_SYNCED)?;
            for row in rows {
                stmt.execute(params![row.timestamp.to_db_string(), row.action, row.status])?;
            }
        }
        tx.commit()?;
        Ok(rows.len())
    }

    pub fn fetch_synced(&self) -> Result<Vec<LogEvent>> {
        self.select(SELECT_SYNCED)
    }

    fn select(&self, sql: &str) -> Result<Vec<LogEvent>> {
        let conn_guard = self.conn.lock();
        let mut stmt = conn_guard.prepare(sql)?;
        let event_iter = stmt.query_map([], row_to_event)?;

        let mut events = Vec::new();
        for event in event_iter {
            events.push(event?);
        }

        Ok(events)
    }
}

fn row_to_event(row: &Row) -> rusqlite::Result<LogEvent> {
    let timestamp: String = row.get(0)?;
    Ok(LogEvent {
        timestamp: Stamp::parse(&timestamp),
        action: row.get(1)?,
        status: row.get(2)?,
    })
}
