//! Archive Loader
//!
//! Builds the in-memory tree from a zip archive.

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use tracing::{debug, info, warn};
use zip::ZipArchive;

use super::types::{Directory, FileNode};
use crate::error::Result;

/// Open the zip archive at `path` and load every entry into a tree.
pub fn load_archive(path: impl AsRef<Path>) -> Result<Directory> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let tree = read_archive(BufReader::new(file))?;
    info!(archive = %path.display(), entries = tree.len(), "loaded archive");
    Ok(tree)
}

/// Load every entry of a zip stream into a tree.
///
/// Directory markers (names ending in `/`) only create directories. A
/// single unreadable entry is skipped, it never fails the whole load.
pub fn read_archive<R: Read + Seek>(reader: R) -> Result<Directory> {
    let mut archive = ZipArchive::new(reader)?;
    let mut tree = Directory::new();

    'entries: for index in 0..archive.len() {
        let mut entry = match archive.by_index(index) {
            Ok(entry) => entry,
            Err(err) => {
                warn!(index, error = %err, "skipping unreadable archive entry");
                continue;
            }
        };
        let name = entry.name().to_string();
        debug!("Reading file: {}", name);

        let parts: Vec<&str> = name.split('/').collect();
        let Some((last, parents)) = parts.split_last() else {
            continue;
        };

        let mut current = &mut tree;
        for part in parents {
            let Some(next) = current.ensure_dir(part) else {
                warn!(entry = %name, segment = %part, "path crosses a file, skipping entry");
                continue 'entries;
            };
            current = next;
        }

        if last.is_empty() {
            continue;
        }

        let mut bytes = Vec::new();
        if let Err(err) = entry.read_to_end(&mut bytes) {
            warn!(entry = %name, error = %err, "failed to read archive entry, skipping");
            continue;
        }
        current.insert(*last, FileNode::new(decode_text(&bytes)));
    }

    Ok(tree)
}

/// Decode bytes as UTF-8, dropping any invalid sequences.
fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.utf8_chunks().map(|chunk| chunk.valid()).collect(),
    }
}
