//! Database Connection and Setup
//!
//! Manages the SQLite connection, schema and the one-time checklist seed.

use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::domain::{timestamp, DomainError, DomainResult, DEFAULT_PROPERTY_NAME};
use super::seed::SEED_ITEMS;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl From<rusqlite::Error> for DomainError {
    fn from(e: rusqlite::Error) -> Self {
        DomainError::StorageUnavailable(e.to_string())
    }
}

/// Shared connection handle
///
/// Cloning shares the same connection. The connection closes when the last
/// clone is dropped.
#[derive(Clone)]
pub struct DbState {
    conn: Arc<Mutex<Connection>>,
}

impl DbState {
    fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Open (or create) the database file at `db_path`
    pub fn open(db_path: &Path) -> DomainResult<Self> {
        if let Some(dir) = db_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| {
                DomainError::StorageUnavailable(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        let conn = Connection::open(db_path).map_err(|e| {
            DomainError::StorageUnavailable(format!("Failed to open {}: {}", db_path.display(), e))
        })?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        log::debug!("Opened database at {}", db_path.display());
        Ok(Self::new(conn))
    }

    /// Private in-memory database, used by tests and dry runs
    pub fn open_in_memory() -> DomainResult<Self> {
        Ok(Self::new(Connection::open_in_memory()?))
    }

    /// Get the connection, failing if a previous holder panicked
    pub fn lock(&self) -> DomainResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| DomainError::StorageUnavailable("Database connection poisoned".to_string()))
    }
}

/// Create tables if absent and seed the standard checklist into an empty store.
///
/// Safe to call any number of times. Returns the number of seeded items.
pub fn initialize(db: &DbState, today: NaiveDate) -> DomainResult<usize> {
    let mut conn = db.lock()?;
    run_migrations(&conn)?;

    let tx = conn.transaction()?;
    let count: i64 = tx.query_row("SELECT COUNT(*) FROM dd_items", [], |row| row.get(0))?;
    let mut seeded = 0;
    if count == 0 {
        let now = timestamp::format_timestamp(timestamp::now());
        {
            let mut stmt = tx.prepare(
                "INSERT INTO dd_items (category, item_name, status, responsible_party, due_date, notes, last_updated)
                 VALUES (?, ?, 'Not Started', '', ?, ?, ?)",
            )?;
            for seed in SEED_ITEMS.iter() {
                let due = seed.due_date(today).map(timestamp::format_date);
                stmt.execute(params![seed.category, seed.item_name, due, seed.notes, now])?;
                seeded += 1;
            }
        }
        log::info!("Seeded {} standard checklist items", seeded);
    }
    tx.commit()?;

    Ok(seeded)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "PRAGMA journal_mode=WAL;

        CREATE TABLE IF NOT EXISTS dd_items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            category TEXT NOT NULL,
            item_name TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'Not Started',
            responsible_party TEXT,
            due_date TEXT,
            notes TEXT,
            last_updated TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS property_info (
            id INTEGER PRIMARY KEY CHECK (id = 1),
            property_name TEXT NOT NULL DEFAULT 'Property Name',
            last_updated TIMESTAMP DEFAULT CURRENT_TIMESTAMP
        );

        CREATE INDEX IF NOT EXISTS idx_dd_items_category ON dd_items(category, item_name);",
    )?;
    Ok(())
}

/// Insert the singleton property row if it does not exist yet
pub(crate) fn ensure_property_row(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO property_info (id, property_name, last_updated) VALUES (1, ?, ?)",
        params![DEFAULT_PROPERTY_NAME, timestamp::format_timestamp(timestamp::now())],
    )?;
    Ok(())
}
