//! Simple file-based logging for debugging
//!
//! A sink for the `log` facade. Every record is written as
//! `[<unix millis>] LEVEL target: message` and flushed straight away, so the
//! file is useful even after a crash.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use parking_lot::Mutex;

use crate::shared::config::LoggingConfig;

/// Get the directory where the executable is located
pub fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|d| d.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Logger writing to a single file
pub struct FileLogger {
    file: Mutex<File>,
    level: LevelFilter,
}

impl FileLogger {
    /// Open (and truncate) the log file at `path`
    pub fn new(path: &Path, level: LevelFilter) -> io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        Ok(Self {
            file: Mutex::new(file),
            level,
        })
    }
}

impl Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut file = self.file.lock();
        let _ = writeln!(
            file,
            "[{}] {:<5} {}: {}",
            timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        let _ = file.flush();
    }

    fn flush(&self) {
        let _ = self.file.lock().flush();
    }
}

/// Error from setting up logging
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("Can't open log file: {0}")]
    Io(#[from] io::Error),

    #[error("A logger is already installed")]
    AlreadySet(#[from] SetLoggerError),
}

/// Install a file logger at `path` as the global logger
pub fn init(path: &Path, level: LevelFilter) -> Result<(), InitError> {
    let logger = FileLogger::new(path, level)?;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    log::info!("=== explorer-nav log started ===");
    Ok(())
}

/// Install a file logger next to the executable
pub fn init_default(level: LevelFilter) -> Result<(), InitError> {
    init(&exe_dir().join("explorer-nav.log"), level)
}

/// Install the logger described by the `[logging]` config section.
///
/// Writes to the configured file if there is one, creating its directory,
/// otherwise next to the executable.
pub fn init_from_config(config: &LoggingConfig) -> Result<(), InitError> {
    let level = config.level_filter();
    match &config.file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            init(path, level)
        }
        None => init_default(level),
    }
}

/// Get current timestamp as milliseconds
fn timestamp() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
