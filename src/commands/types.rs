// src/commands/types.rs
use crate::fs::{Directory, Navigator};

/// 命令执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    /// Set by `exit`; the session ends after this result is shown.
    pub exit: bool,
}

impl CommandResult {
    pub fn success(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0, exit: false }
    }

    pub fn error(stderr: String) -> Self {
        Self { stdout: String::new(), stderr, exit_code: 1, exit: false }
    }

    pub fn exit(stdout: String) -> Self {
        Self { stdout, stderr: String::new(), exit_code: 0, exit: true }
    }

    /// The single response text the shell prints: stdout on success,
    /// stderr otherwise.
    pub fn into_output(self) -> String {
        if self.exit_code == 0 {
            self.stdout
        } else {
            self.stderr
        }
    }
}

/// 命令执行上下文
pub struct CommandContext<'a> {
    pub args: &'a [String],
    pub tree: &'a mut Directory,
    pub nav: &'a mut Navigator,
}

impl<'a> CommandContext<'a> {
    /// Positional argument `index`, if present.
    pub fn arg(&self, index: usize) -> Option<&'a str> {
        self.args.get(index).map(String::as_str)
    }
}

/// 命令 trait
pub trait Command {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
