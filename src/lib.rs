//! shell-emulator - An interactive shell over a virtual file tree
//!
//! This library loads a file tree from a zip archive (optionally overlaid by
//! a saved JSON snapshot) and answers `ls`, `cd`, `tree`, `wc`, `chmod` and
//! `exit` against it, logging every command line to a CSV file.

pub mod commands;
pub mod error;
pub mod fs;
pub mod history;
pub mod shell;
pub mod telemetry;

pub use error::{Result, ShellError};
pub use shell::{run_repl, ExecOutcome, ShellEmulator, ShellOptions};
