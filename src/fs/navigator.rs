//! Filesystem Navigator
//!
//! Tracks the shell's current directory as a sequence of validated name
//! segments measured from the top of the tree.

use super::types::{Directory, FsError};

/// How `cd` resolves a plain name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CdMode {
    /// Conventional resolution: names are children of the current directory.
    #[default]
    Child,
    /// Compatibility resolution: the name is joined onto the *parent* of the
    /// current directory and must then match a child of the current
    /// directory. In practice only single-level moves from home succeed.
    Sibling,
}

/// Current-directory state for one shell session.
#[derive(Debug, Clone)]
pub struct Navigator {
    home: Vec<String>,
    cwd: Vec<String>,
    mode: CdMode,
}

impl Navigator {
    /// Create a navigator positioned at `home`.
    pub fn new(home: Vec<String>, mode: CdMode) -> Self {
        Self {
            cwd: home.clone(),
            home,
            mode,
        }
    }

    pub fn home(&self) -> &[String] {
        &self.home
    }

    pub fn segments(&self) -> &[String] {
        &self.cwd
    }

    pub fn mode(&self) -> CdMode {
        self.mode
    }

    pub fn is_at_home(&self) -> bool {
        self.cwd.len() <= self.home.len()
    }

    /// Absolute display form, e.g. `/Fs/subdir1`.
    pub fn display_path(&self) -> String {
        format!("/{}", self.cwd.join("/"))
    }

    /// The directory the navigator currently points at.
    pub fn resolve_current<'a>(&self, tree: &'a Directory) -> Option<&'a Directory> {
        tree.descend(&self.cwd)
    }

    pub fn resolve_current_mut<'a>(&self, tree: &'a mut Directory) -> Option<&'a mut Directory> {
        tree.descend_mut(&self.cwd)
    }

    /// Names of every entry in the current directory, in insertion order.
    pub fn list(&self, tree: &Directory) -> Result<Vec<String>, FsError> {
        let dir = self.resolve_current(tree).ok_or(FsError::NotFound)?;
        Ok(dir.names().map(str::to_string).collect())
    }

    /// Move up one level. Does nothing at home.
    pub fn up(&mut self) {
        if !self.is_at_home() {
            self.cwd.pop();
        }
    }

    /// Change directory. On failure the current path is left untouched.
    pub fn enter(&mut self, tree: &Directory, path: &str) -> Result<(), FsError> {
        if path == ".." {
            self.up();
            return Ok(());
        }

        let target = match self.mode {
            CdMode::Child => self.resolve_child(tree, path),
            CdMode::Sibling => self.resolve_sibling(tree, path),
        };

        match target {
            Some(target) => {
                self.cwd = target;
                Ok(())
            }
            None => Err(FsError::DirectoryNotFound(path.to_string())),
        }
    }

    /// Resolve `path` relative to the current directory (or home when it
    /// is empty or starts with `/`). Every intermediate step must be an
    /// existing directory.
    fn resolve_child(&self, tree: &Directory, path: &str) -> Option<Vec<String>> {
        let mut target = if path.is_empty() || path.starts_with('/') {
            self.home.clone()
        } else {
            self.cwd.clone()
        };

        for segment in path.split('/') {
            match segment {
                "" | "." => {}
                ".." => {
                    if target.len() > self.home.len() {
                        target.pop();
                    }
                }
                name => {
                    target.push(name.to_string());
                    tree.descend(&target)?;
                }
            }
        }

        tree.descend(&target).map(|_| target)
    }

    fn resolve_sibling(&self, tree: &Directory, path: &str) -> Option<Vec<String>> {
        // Segments are taken relative to home's parent, so home itself
        // contributes only its last name and the first move down works
        // whatever the depth of home.
        let parent_len = self.cwd.len().saturating_sub(1);
        let start = self.home.len().saturating_sub(1).min(parent_len);
        let mut candidate: Vec<String> = self.cwd[start..parent_len].to_vec();
        candidate.push(path.trim_matches('/').to_string());

        let current = self.resolve_current(tree)?;
        current.get_dir(&candidate.join("/"))?;

        let mut target = self.home.clone();
        target.extend(candidate);
        tree.descend(&target).map(|_| target)
    }
}
