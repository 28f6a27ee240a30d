use crate::commands::{Command, CommandContext, CommandResult};
use crate::fs::{Directory, FsError, FsNode};

pub struct TreeCommand;

const EMPTY: &str = "(empty)";

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        match ctx.nav.resolve_current(ctx.tree) {
            Some(dir) => CommandResult::success(render_tree(dir)),
            None => CommandResult::error(FsError::NotFound.to_string()),
        }
    }
}

/// Render every descendant of `dir`, depth first, one entry per line.
pub fn render_tree(dir: &Directory) -> String {
    let mut lines = Vec::new();
    build_tree(dir, "", &mut lines);
    if lines.is_empty() {
        EMPTY.to_string()
    } else {
        lines.join("\n")
    }
}

fn build_tree(dir: &Directory, prefix: &str, lines: &mut Vec<String>) {
    let count = dir.len();
    for (idx, (name, node)) in dir.iter().enumerate() {
        let is_last = idx == count - 1;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{}{}{}", prefix, connector, name));

        if let FsNode::Directory(child) = node {
            let child_prefix = format!("{}{}", prefix, if is_last { "    " } else { "│   " });
            build_tree(child, &child_prefix, lines);
        }
    }
}
