//! File System Module
//!
//! The virtual file tree the shell operates on:
//! - types: node model and user-facing errors
//! - archive: builds the tree from a zip archive
//! - snapshot: JSON persistence and startup overlay
//! - navigator: current-directory tracking and `cd` resolution

pub mod archive;
pub mod navigator;
pub mod snapshot;
pub mod types;

pub use archive::{load_archive, read_archive};
pub use navigator::{CdMode, Navigator};
pub use snapshot::{load_snapshot, merge_snapshot, save_snapshot, DEFAULT_SNAPSHOT_PATH};
pub use types::*;
