//! Command history log
//!
//! Every line handed to the interpreter is appended to a CSV file as
//! `username, command, timestamp`. The file is opened and closed per call.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::error::Result;

/// Default log location, relative to the working directory.
pub const DEFAULT_LOG_PATH: &str = "log.csv";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Append-only CSV command log.
#[derive(Debug, Clone)]
pub struct CommandLogger {
    path: PathBuf,
    username: String,
}

impl CommandLogger {
    pub fn new(path: impl Into<PathBuf>, username: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            username: username.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one row for `command`, stamped with the current local time.
    pub fn log(&self, command: &str) -> Result<()> {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.log_at(command, &timestamp)
    }

    fn log_at(&self, command: &str, timestamp: &str) -> Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        writer.write_record([self.username.as_str(), command, timestamp])?;
        writer.flush()?;
        Ok(())
    }
}
