//! exit - End the session

use crate::commands::{Command, CommandContext, CommandResult};

pub const EXIT_MESSAGE: &str = "Exiting emulator...";

pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, _ctx: CommandContext<'_>) -> CommandResult {
        CommandResult::exit(EXIT_MESSAGE.to_string())
    }
}
