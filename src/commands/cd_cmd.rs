//! cd - Change directory
//!
//! `cd <dir>` moves into a directory, `cd ..` moves up one level (never
//! above home) and a bare `cd` returns home. How a plain name is resolved
//! depends on the navigator's `CdMode`.

use crate::commands::{Command, CommandContext, CommandResult};

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let path = ctx.arg(0).unwrap_or("");
        match ctx.nav.enter(ctx.tree, path) {
            Ok(()) => CommandResult::success(String::new()),
            Err(err) => CommandResult::error(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{run, sample_shell};

    #[test]
    fn test_cd_into_subdir() {
        let (mut tree, mut nav) = sample_shell();
        let result = run(&CdCommand, &mut tree, &mut nav, &["subdir1"]);
        assert_eq!(result.stdout, "");
        assert_eq!(nav.display_path(), "/Fs/subdir1");
    }

    #[test]
    fn test_cd_nonexistent() {
        let (mut tree, mut nav) = sample_shell();
        let result = run(&CdCommand, &mut tree, &mut nav, &["nonexistent_directory"]);
        assert_eq!(result.into_output(), "Directory 'nonexistent_directory' not found.");
        assert_eq!(nav.display_path(), "/Fs");
    }

    #[test]
    fn test_cd_dotdot_and_home() {
        let (mut tree, mut nav) = sample_shell();
        run(&CdCommand, &mut tree, &mut nav, &["subdir1"]);
        run(&CdCommand, &mut tree, &mut nav, &[".."]);
        assert_eq!(nav.display_path(), "/Fs");
        run(&CdCommand, &mut tree, &mut nav, &[".."]);
        assert_eq!(nav.display_path(), "/Fs");

        run(&CdCommand, &mut tree, &mut nav, &["subdir1/empty"]);
        run(&CdCommand, &mut tree, &mut nav, &[]);
        assert_eq!(nav.display_path(), "/Fs");
    }

    #[test]
    fn test_cd_into_file_fails() {
        let (mut tree, mut nav) = sample_shell();
        let result = run(&CdCommand, &mut tree, &mut nav, &["start.sh"]);
        assert_eq!(result.exit_code, 1);
        assert_eq!(nav.display_path(), "/Fs");
    }
}
