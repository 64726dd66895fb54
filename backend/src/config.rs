//! Application configuration
//!
//! Resolves where the database and logs live. Defaults sit under the
//! platform data directory; the front end may override either path.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::report::DUE_SOON_DAYS;

pub const APP_DIR_NAME: &str = "dd-tracker";
pub const DB_FILE_NAME: &str = "dd_tracker.db";
pub const LOG_DIR_NAME: &str = "logs";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    /// Look-ahead window for "due soon" lists, in days
    pub due_soon_days: u64,
}

/// Platform data directory for the app, falling back to the working directory
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::in_dir(default_data_dir())
    }
}

impl AppConfig {
    /// Keep the database and logs together under `dir`
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            db_path: dir.join(DB_FILE_NAME),
            log_dir: dir.join(LOG_DIR_NAME),
            due_soon_days: DUE_SOON_DAYS,
        }
    }

    pub fn with_db_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.db_path = path;
        }
        self
    }

    pub fn with_log_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.log_dir = dir;
        }
        self
    }
}
