//! Snapshot persistence
//!
//! A snapshot is the whole tree serialized as JSON in the same nested shape
//! as the in-memory model. It is read once at startup and overlaid onto the
//! archive tree; writing it is always an explicit request.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use tracing::info;

use super::types::Directory;
use crate::error::Result;

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_SNAPSHOT_PATH: &str = "filesystem.json";

/// Read a snapshot. A missing file yields `Ok(None)`.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Option<Directory>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    let tree = serde_json::from_reader(BufReader::new(file))?;
    Ok(Some(tree))
}

/// Overlay the snapshot at `path` onto `tree` (top-level keys only).
///
/// Returns whether a snapshot was found.
pub fn merge_snapshot(tree: &mut Directory, path: impl AsRef<Path>) -> Result<bool> {
    let path = path.as_ref();
    match load_snapshot(path)? {
        Some(saved) => {
            info!(snapshot = %path.display(), entries = saved.len(), "merging saved filesystem");
            tree.merge_shallow(saved);
            Ok(true)
        }
        None => {
            info!("No saved filesystem found. Starting fresh.");
            Ok(false)
        }
    }
}

/// Write the whole tree to `path`, replacing any previous snapshot.
pub fn save_snapshot(tree: &Directory, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, tree)?;
    writer.flush()?;
    info!(snapshot = %path.display(), "saved filesystem");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShellError;
    use crate::fs::types::FileNode;

    fn sample() -> Directory {
        let mut sub = Directory::new();
        sub.insert("inner.txt", FileNode::new("inner"));
        let mut fs_root = Directory::new();
        fs_root.insert("file2.txt", FileNode::new("a b\nc"));
        fs_root.insert("subdir1", sub);
        let mut tree = Directory::new();
        tree.insert("Fs", fs_root);
        tree
    }

    #[test]
    fn test_missing_snapshot_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut tree = sample();
        let merged = merge_snapshot(&mut tree, dir.path().join("filesystem.json")).unwrap();
        assert!(!merged);
        assert_eq!(tree, sample());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filesystem.json");
        let mut tree = sample();
        tree.descend_mut(&["Fs"])
            .unwrap()
            .get_file_mut("file2.txt")
            .unwrap()
            .permissions = "rwxr-xr--".to_string();

        save_snapshot(&tree, &path).unwrap();
        let loaded = load_snapshot(&path).unwrap().unwrap();
        assert_eq!(loaded, tree);
    }

    #[test]
    fn test_merge_is_shallow() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filesystem.json");
        std::fs::write(
            &path,
            r#"{"Fs": {"only.txt": {"content": "x", "owner": "me", "permissions": "r--------"}},
                "Extra": {}}"#,
        )
        .unwrap();

        let mut tree = sample();
        assert!(merge_snapshot(&mut tree, &path).unwrap());

        let fs_root = tree.get_dir("Fs").unwrap();
        let names: Vec<&str> = fs_root.names().collect();
        assert_eq!(names, vec!["only.txt"]);
        assert_eq!(fs_root.get_file("only.txt").unwrap().owner, "me");
        assert!(tree.get_dir("Extra").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("filesystem.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        let mut tree = sample();
        let err = merge_snapshot(&mut tree, &path).unwrap_err();
        assert!(matches!(err, ShellError::Snapshot(_)));
    }
}
