// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        match ctx.nav.list(ctx.tree) {
            Ok(names) => CommandResult::success(names.join("\n")),
            Err(err) => CommandResult::error(err.to_string()),
        }
    }
}
