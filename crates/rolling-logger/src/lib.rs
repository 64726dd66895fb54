//! Rolling file logger
//!
//! Installs a global `tracing` subscriber that writes to a size-rotated log
//! file. Records emitted through the `log` crate are forwarded as well.
//! Warnings and errors are echoed to stderr without timestamps.

mod writer;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};

use thiserror::Error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

pub use tracing_subscriber::filter::LevelFilter;
pub use writer::RollingFile;

pub const DEFAULT_MAX_BYTES: u64 = 1024 * 1024;
pub const DEFAULT_MAX_FILES: usize = 3;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file: {0}")]
    Io(#[from] io::Error),
    #[error("a global logger is already installed")]
    AlreadyInitialized,
    #[error("logger has not been initialized")]
    NotInitialized,
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub max_bytes: u64,
    pub max_files: usize,
    /// Minimum level written to the file
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_BYTES,
            max_files: DEFAULT_MAX_FILES,
            level: LevelFilter::INFO,
        }
    }
}

/// Cheap handle handed to the fmt layer for every event
#[derive(Clone)]
struct SinkWriter(Arc<Mutex<RollingFile>>);

impl Write for SinkWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut file = self
            .0
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file poisoned"))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.0.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Ok(()),
        }
    }
}

/// Local wall-clock timestamps with milliseconds
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Initialize logging into `log_dir/<app_name>.log`
pub fn init_logger(log_dir: &Path, app_name: &str, config: LoggerConfig) -> Result<(), LoggerError> {
    if LOG_PATH.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let file = RollingFile::open(log_dir, app_name, config.max_bytes, config.max_files)?;
    let path = file.current_path();
    let writer = SinkWriter(Arc::new(Mutex::new(file)));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_filter(config.level);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    let _ = LOG_PATH.set(path);
    tracing::info!("Logger initialized for {}", app_name);
    Ok(())
}

/// Path of the active log file, once initialized
pub fn log_file_path() -> Option<&'static Path> {
    LOG_PATH.get().map(PathBuf::as_path)
}

fn ensure_initialized() -> Result<(), LoggerError> {
    LOG_PATH.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

/// Log through the installed subscriber; fails if there is none
pub fn info(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{}", message);
    Ok(())
}
