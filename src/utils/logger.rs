//! Logger utility for application-wide logging
//!
//! This module provides a custom logger implementation that works alongside
//! the standard log crate. A file-backed instance records the processing
//! log of a run; a console instance serves as the global `log` backend.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use log::{Log, Record, Metadata, LevelFilter};

/// Custom logger implementation
pub struct Logger {
    /// File handle for log output
    file: Mutex<Option<File>>,
    /// Where the file lives, if any
    path: Option<PathBuf>,
    /// Most verbose level echoed to the console
    level: LevelFilter,
}

impl Logger {
    /// Creates a new logger writing to `log_file`
    ///
    /// # Arguments
    ///
    /// * `log_file` - Path to the log file
    ///
    /// # Returns
    ///
    /// A new Logger instance or an error if the file cannot be created
    pub fn new<P: AsRef<Path>>(log_file: P) -> io::Result<Self> {
        let path = log_file.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Logger {
            file: Mutex::new(Some(file)),
            path: Some(path),
            level: LevelFilter::Info,
        })
    }

    /// Creates a logger that only prints to the console
    pub fn console(level: LevelFilter) -> Self {
        Logger {
            file: Mutex::new(None),
            path: None,
            level,
        }
    }

    /// Path of the backing file, if this logger has one
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Logs a message to the log file
    ///
    /// # Arguments
    ///
    /// * `message` - The message to log
    pub fn log(&self, message: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(file) = guard.as_mut() {
            writeln!(file, "{}", message)?;
            file.flush()?;
        }
        Ok(())
    }

    /// Flushes and releases the log file
    ///
    /// Later calls to `log` are ignored.
    pub fn close(&self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        if let Some(mut file) = guard.take() {
            file.flush()?;
        }
        Ok(())
    }

    /// Static method to initialize the global console logger
    pub fn init_global_logger(level: LevelFilter) {
        // Set up the global logger - we only call this once at startup
        if log::set_boxed_logger(Box::new(Logger::console(level))).is_err() {
            eprintln!("Warning: Global logger was already initialized");
        }

        log::set_max_level(level);
    }
}

// Implement the Log trait to make our Logger work with the log crate
impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let message = format!("[{}] {}", record.level(), record.args());
            let _ = Logger::log(self, &message);

            // Also print to console
            println!("{}", message);
        }
    }

    fn flush(&self) {
        // Already flushing in the log method
    }
}
