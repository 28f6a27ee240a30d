//! File System Types
//!
//! Core types for the virtual file tree: nodes, file metadata and errors.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Owner attached to every file loaded from an archive.
pub const DEFAULT_OWNER: &str = "default_owner";

/// Permission string attached to every file loaded from an archive.
pub const DEFAULT_PERMISSIONS: &str = "rw-r--r--";

/// File system errors.
///
/// The `Display` text of each variant is exactly what the shell prints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("Current directory not found.")]
    NotFound,

    #[error("Directory '{0}' not found.")]
    DirectoryNotFound(String),

    #[error("{0}: No such file")]
    NoSuchFile(String),
}

/// A leaf of the tree: text content plus cosmetic metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileNode {
    pub content: String,
    pub owner: String,
    pub permissions: String,
}

impl FileNode {
    /// Create a file with the default owner and permissions.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            owner: DEFAULT_OWNER.to_string(),
            permissions: DEFAULT_PERMISSIONS.to_string(),
        }
    }
}

/// Insertion-ordered mapping of child names to nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directory {
    entries: IndexMap<String, FsNode>,
}

/// File system node.
///
/// Serialized untagged: a file is an object with exactly `content`, `owner`
/// and `permissions` string fields, anything else is a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FsNode {
    File(FileNode),
    Directory(Directory),
}

impl FsNode {
    pub fn is_file(&self) -> bool {
        matches!(self, FsNode::File(_))
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory(_))
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            FsNode::File(file) => Some(file),
            FsNode::Directory(_) => None,
        }
    }

    pub fn as_file_mut(&mut self) -> Option<&mut FileNode> {
        match self {
            FsNode::File(file) => Some(file),
            FsNode::Directory(_) => None,
        }
    }

    pub fn as_directory(&self) -> Option<&Directory> {
        match self {
            FsNode::Directory(dir) => Some(dir),
            FsNode::File(_) => None,
        }
    }

    pub fn as_directory_mut(&mut self) -> Option<&mut Directory> {
        match self {
            FsNode::Directory(dir) => Some(dir),
            FsNode::File(_) => None,
        }
    }
}

impl From<FileNode> for FsNode {
    fn from(file: FileNode) -> Self {
        FsNode::File(file)
    }
}

impl From<Directory> for FsNode {
    fn from(dir: Directory) -> Self {
        FsNode::Directory(dir)
    }
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&FsNode> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FsNode> {
        self.entries.get_mut(name)
    }

    pub fn get_file(&self, name: &str) -> Option<&FileNode> {
        self.get(name).and_then(FsNode::as_file)
    }

    pub fn get_file_mut(&mut self, name: &str) -> Option<&mut FileNode> {
        self.get_mut(name).and_then(FsNode::as_file_mut)
    }

    pub fn get_dir(&self, name: &str) -> Option<&Directory> {
        self.get(name).and_then(FsNode::as_directory)
    }

    pub fn get_dir_mut(&mut self, name: &str) -> Option<&mut Directory> {
        self.get_mut(name).and_then(FsNode::as_directory_mut)
    }

    /// Insert a node, returning the one it replaced. A replaced name keeps
    /// its original position.
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<FsNode>) -> Option<FsNode> {
        self.entries.insert(name.into(), node.into())
    }

    /// Get the child directory `name`, creating it when absent.
    ///
    /// Returns `None` when a file already occupies the name.
    pub fn ensure_dir(&mut self, name: &str) -> Option<&mut Directory> {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| FsNode::Directory(Directory::new()))
            .as_directory_mut()
    }

    /// Child names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FsNode)> {
        self.entries.iter().map(|(name, node)| (name.as_str(), node))
    }

    /// Walk down through `segments`; `None` if any step is missing or a file.
    pub fn descend<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Directory> {
        segments
            .iter()
            .try_fold(self, |dir, segment| dir.get_dir(segment.as_ref()))
    }

    pub fn descend_mut<S: AsRef<str>>(&mut self, segments: &[S]) -> Option<&mut Directory> {
        let mut current = self;
        for segment in segments {
            current = current.get_dir_mut(segment.as_ref())?;
        }
        Some(current)
    }

    /// Overlay `other` onto this directory one level deep: each top-level
    /// key of `other` replaces or extends the key here, nested contents are
    /// not merged.
    pub fn merge_shallow(&mut self, other: Directory) {
        self.entries.extend(other.entries);
    }
}

// ============================================================================
// Tests
// ============================================================================
