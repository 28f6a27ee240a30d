// src/commands/wc/mod.rs
use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::FsError;

pub struct WcCommand;

#[derive(Debug, Default, PartialEq, Eq)]
struct Stats {
    lines: usize,
    words: usize,
    chars: usize,
}

/// Characters that end a line, including the `\r\n` pair handled in
/// `split_lines`.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split into lines without their terminators. A trailing terminator does
/// not start another line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&content[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Whitespace-delimited tokens; the unit separator `\x1f` also splits.
fn count_words(line: &str) -> usize {
    line.split(|c: char| c.is_whitespace() || c == '\x1f')
        .filter(|word| !word.is_empty())
        .count()
}

fn count_stats(content: &str) -> Stats {
    let lines = split_lines(content);
    Stats {
        lines: lines.len(),
        words: lines.iter().map(|line| count_words(line)).sum(),
        chars: lines.iter().map(|line| line.chars().count()).sum(),
    }
}

impl Command for WcCommand {
    fn name(&self) -> &'static str {
        "wc"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let Some(filename) = ctx.arg(0) else {
            return CommandResult::error("Error: wc requires a filename.".to_string());
        };

        let Some(dir) = ctx.nav.resolve_current(ctx.tree) else {
            return CommandResult::error(FsError::NotFound.to_string());
        };

        match dir.get_file(filename) {
            Some(file) => {
                let stats = count_stats(&file.content);
                CommandResult::success(format!(
                    "{} lines, {} words, {} characters",
                    stats.lines, stats.words, stats.chars
                ))
            }
            None => CommandResult::error(FsError::NoSuchFile(filename.to_string()).to_string()),
        }
    }
}
