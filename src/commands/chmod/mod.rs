// src/commands/chmod/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct ChmodCommand;

impl Command for ChmodCommand {
    fn name(&self) -> &'static str { "chmod" }

    /// `chmod <mode> <file>`: the mode string is stored verbatim, it is never
    /// parsed or enforced.
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let (Some(mode), Some(filename)) = (ctx.arg(0), ctx.arg(1)) else {
            return CommandResult::error("Error: chmod requires a mode and a filename.".into());
        };

        let Some(dir) = ctx.nav.resolve_current_mut(ctx.tree) else {
            return CommandResult::error(FsError::NotFound.to_string());
        };

        match dir.get_file_mut(filename) {
            Some(file) => {
                file.permissions = mode.to_string();
                CommandResult::success(format!("Permissions of {} changed to {}", filename, mode))
            }
            None => CommandResult::error(FsError::NoSuchFile(filename.to_string()).to_string()),
        }
    }
}
