use clap::Parser;
use std::io;
use std::path::PathBuf;
use shell_emulator::fs::CdMode;
use shell_emulator::{run_repl, ShellEmulator, ShellOptions};

#[derive(Parser)]
#[command(name = "shell-emulator")]
#[command(about = "An interactive shell over a virtual file tree loaded from a zip archive")]
#[command(version)]
struct Cli {
    /// Username shown in the prompt and written to the log
    #[arg(short = 'u', long = "user", default_value = "test_user")]
    user: String,

    /// Zip archive holding the file tree
    #[arg(short = 'a', long = "archive", default_value = "Fs.zip")]
    archive: PathBuf,

    /// CSV file every command line is appended to
    #[arg(short = 'l', long = "log", default_value = "log.csv")]
    log: PathBuf,

    /// JSON snapshot merged at startup
    #[arg(short = 's', long = "snapshot", default_value = "filesystem.json")]
    snapshot: PathBuf,

    /// Home directory inside the archive (defaults to its single top-level directory)
    #[arg(long = "root")]
    root: Option<String>,

    /// Resolve `cd` targets against the parent of the current directory
    #[arg(long = "sibling-cd")]
    sibling_cd: bool,

    /// Write the snapshot when the session ends
    #[arg(long = "save-on-exit")]
    save_on_exit: bool,
}

fn main() {
    let cli = Cli::parse();
    shell_emulator::telemetry::init_logging();

    let options = ShellOptions {
        username: cli.user,
        archive_path: cli.archive,
        log_path: cli.log,
        snapshot_path: cli.snapshot,
        root: cli.root,
        cd_mode: if cli.sibling_cd { CdMode::Sibling } else { CdMode::Child },
    };

    let mut shell = match ShellEmulator::new(options) {
        Ok(shell) => shell,
        Err(e) => {
            eprintln!("Error: Cannot start emulator: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_repl(&mut shell, io::stdin().lock(), io::stdout().lock()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if cli.save_on_exit {
        if let Err(e) = shell.save_snapshot() {
            eprintln!("Error: Cannot save snapshot: {}", e);
            std::process::exit(1);
        }
    }
}
