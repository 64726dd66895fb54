//! Due Diligence Tracker Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access (SQLite store, one-time checklist seed)
//! - report: Aggregation and Markdown status reports
//! - commands: Operations the presentation layer calls

use std::path::{Path, PathBuf};

pub mod config;
pub mod domain;
pub mod repository;
pub mod report;
pub mod commands;

use config::AppConfig;
use domain::DomainResult;
use repository::{DbState, ItemRepository, PropertyRepository};
use report::ReportGenerator;

/// Application state shared across commands
///
/// Built once at startup and passed to every command. Dropping it closes
/// the database.
pub struct AppState {
    pub db_state: DbState,
    pub db_path: PathBuf,
    pub config: AppConfig,
    items: ItemRepository,
    property: PropertyRepository,
}

impl AppState {
    /// Open the database named by `config`. Does not create tables; call
    /// [`commands::initialize`] before use.
    pub fn open(config: AppConfig) -> DomainResult<Self> {
        let db_state = DbState::open(&config.db_path)?;
        Ok(Self::with_db(db_state, config))
    }

    /// Throwaway in-memory store
    pub fn in_memory() -> DomainResult<Self> {
        let config = AppConfig::default().with_db_path(Some(PathBuf::from(":memory:")));
        Ok(Self::with_db(DbState::open_in_memory()?, config))
    }

    fn with_db(db_state: DbState, config: AppConfig) -> Self {
        Self {
            items: ItemRepository::new(db_state.clone()),
            property: PropertyRepository::new(db_state.clone()),
            db_path: config.db_path.clone(),
            db_state,
            config,
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub fn items(&self) -> &ItemRepository {
        &self.items
    }

    pub fn property(&self) -> &PropertyRepository {
        &self.property
    }

    pub fn report_generator(&self) -> ReportGenerator<'_> {
        ReportGenerator::new(&self.items, &self.property).with_window_days(self.config.due_soon_days)
    }
}
