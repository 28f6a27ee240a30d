//! System-level errors.
//!
//! User mistakes never surface here; they become response text. These are
//! the failures that abort startup or an I/O side channel.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("log error: {0}")]
    Log(#[from] csv::Error),
}
