//! Shell Emulator
//!
//! Main entry point for an emulator session.
//! Ties together the archive tree, the navigator, the command set and the
//! command log.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, warn};

use crate::commands::{create_builtin_registry, CommandContext, CommandRegistry, CommandResult};
use crate::error::Result;
use crate::fs::{self, CdMode, Directory, FsNode, Navigator, DEFAULT_SNAPSHOT_PATH};
use crate::history::{CommandLogger, DEFAULT_LOG_PATH};

/// Options for creating a shell session.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Name shown in the prompt and written to the log
    pub username: String,
    /// Zip archive holding the initial tree
    pub archive_path: PathBuf,
    /// CSV command log
    pub log_path: PathBuf,
    /// JSON snapshot merged at startup and written by `save_snapshot`
    pub snapshot_path: PathBuf,
    /// Home directory (`/`-separated, from the top of the tree). Detected
    /// from the archive when unset.
    pub root: Option<String>,
    /// How `cd` resolves plain names
    pub cd_mode: CdMode,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            username: "test_user".to_string(),
            archive_path: PathBuf::from("Fs.zip"),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            root: None,
            cd_mode: CdMode::default(),
        }
    }
}

/// What one command line produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    pub output: String,
    pub exit_requested: bool,
}

/// One interactive session over an in-memory tree.
pub struct ShellEmulator {
    username: String,
    tree: Directory,
    navigator: Navigator,
    logger: CommandLogger,
    registry: CommandRegistry,
    snapshot_path: PathBuf,
}

impl ShellEmulator {
    /// Load the archive, overlay any saved snapshot and position the
    /// navigator at home. Fails if the archive cannot be read.
    pub fn new(options: ShellOptions) -> Result<Self> {
        let mut tree = fs::load_archive(&options.archive_path)?;
        let home = resolve_home(&tree, options.root.as_deref());
        fs::merge_snapshot(&mut tree, &options.snapshot_path)?;
        Ok(Self::assemble(tree, home, options))
    }

    /// Start a session over an already-built tree. No snapshot is read.
    pub fn from_tree(tree: Directory, options: ShellOptions) -> Self {
        let home = resolve_home(&tree, options.root.as_deref());
        Self::assemble(tree, home, options)
    }

    fn assemble(tree: Directory, home: Vec<String>, options: ShellOptions) -> Self {
        if tree.descend(&home).is_none() {
            warn!(home = %home.join("/"), "home directory does not exist in the tree");
        }
        Self {
            logger: CommandLogger::new(options.log_path, options.username.clone()),
            username: options.username,
            navigator: Navigator::new(home, options.cd_mode),
            registry: create_builtin_registry(),
            snapshot_path: options.snapshot_path,
            tree,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn tree(&self) -> &Directory {
        &self.tree
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Prompt shown before each line.
    pub fn prompt(&self) -> String {
        format!("{}@emulator:~$ ", self.username)
    }

    /// Log and run one command line.
    ///
    /// User mistakes come back as response text; only a failure to write
    /// the command log is an error.
    pub fn execute(&mut self, line: &str) -> Result<ExecOutcome> {
        self.logger.log(line)?;

        let parts: Vec<String> = line.split_whitespace().map(String::from).collect();
        let Some((name, args)) = parts.split_first() else {
            return Ok(ExecOutcome::default());
        };

        let result = match self.registry.get(name) {
            Some(cmd) => cmd.execute(CommandContext {
                args,
                tree: &mut self.tree,
                nav: &mut self.navigator,
            }),
            None => {
                debug!(command = %name, known = ?self.registry.names(), "unknown command");
                CommandResult::error(format!("Unknown command: {}", name))
            }
        };
        debug!(command = %name, exit_code = result.exit_code, cwd = %self.navigator.display_path(), "executed");

        let exit_requested = result.exit;
        Ok(ExecOutcome {
            output: result.into_output(),
            exit_requested,
        })
    }

    /// Persist the whole tree to the snapshot file, replacing it.
    pub fn save_snapshot(&self) -> Result<()> {
        fs::save_snapshot(&self.tree, &self.snapshot_path)
    }
}

/// Pick the home path: the configured root, otherwise the single top-level
/// directory of the tree, otherwise the top of the tree itself.
fn resolve_home(tree: &Directory, root: Option<&str>) -> Vec<String> {
    if let Some(root) = root {
        return root
            .split('/')
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
    }
    let mut entries = tree.iter();
    match (entries.next(), entries.next()) {
        (Some((name, FsNode::Directory(_))), None) => vec![name.to_string()],
        _ => Vec::new(),
    }
}

/// Read-eval-print loop: prompt, read a line, print the response. Stops
/// after a line that is exactly `exit`, or at end of input.
pub fn run_repl<R: BufRead, W: Write>(
    shell: &mut ShellEmulator,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{}", shell.prompt())?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        let command = line.trim_end_matches(&['\n', '\r'][..]);
        let outcome = shell.execute(command)?;
        writeln!(output, "{}", outcome.output)?;
        if outcome.exit_requested && command == "exit" {
            break;
        }
    }
    output.flush()?;
    Ok(())
}
