// src/commands/mod.rs
pub mod cd_cmd;
pub mod chmod;
pub mod exit_cmd;
pub mod ls;
pub mod registry;
pub mod tree_cmd;
pub mod types;
pub mod wc;

pub use registry::{create_builtin_registry, CommandRegistry};
pub use types::{Command, CommandContext, CommandResult};
