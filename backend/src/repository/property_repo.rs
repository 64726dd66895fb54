//! Property Repository
//!
//! Persists the singleton property record (row id 1).

use chrono::NaiveDateTime;
use rusqlite::params;

use crate::domain::{timestamp, validate_property_name, DomainResult, PropertyInfo};
use super::db::{ensure_property_row, DbState};

pub struct PropertyRepository {
    db: DbState,
}

impl PropertyRepository {
    pub fn new(db: DbState) -> Self {
        Self { db }
    }

    /// Load the property record, creating the default row on first access
    pub fn load(&self) -> DomainResult<PropertyInfo> {
        let conn = self.db.lock()?;
        ensure_property_row(&conn)?;

        let (name, updated): (String, Option<String>) = conn.query_row(
            "SELECT property_name, CAST(last_updated AS TEXT) FROM property_info WHERE id = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let last_updated = updated
            .as_deref()
            .and_then(timestamp::parse_timestamp)
            .unwrap_or_default();
        Ok(PropertyInfo::new(name, last_updated))
    }

    /// Overwrite the property name in place
    pub fn save_name(&self, name: &str, now: NaiveDateTime) -> DomainResult<PropertyInfo> {
        let name = validate_property_name(name)?;
        let conn = self.db.lock()?;
        ensure_property_row(&conn)?;

        let previous: Option<String> = conn.query_row(
            "SELECT CAST(last_updated AS TEXT) FROM property_info WHERE id = 1",
            [],
            |row| row.get(0),
        )?;
        let stamp = previous
            .as_deref()
            .and_then(timestamp::parse_timestamp)
            .map_or(now, |prev| now.max(prev));

        conn.execute(
            "UPDATE property_info SET property_name = ?, last_updated = ? WHERE id = 1",
            params![name, timestamp::format_timestamp(stamp)],
        )?;
        log::info!("Property name set to '{}'", name);

        Ok(PropertyInfo::new(name, stamp))
    }
}
