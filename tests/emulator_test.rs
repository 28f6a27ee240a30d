use std::fs::File;
use std::io::Write;
use std::path::Path;

use shell_emulator::fs::CdMode;
use shell_emulator::{run_repl, ShellEmulator, ShellOptions};
use tempfile::{tempdir, TempDir};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const FILE2: &str = "The quick brown fox\njumps over\nthe lazy dog\n";

fn write_archive(path: &Path) {
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut zip = ZipWriter::new(File::create(path).unwrap());
    zip.add_directory("Fs/", options).unwrap();
    for (name, content) in [
        ("Fs/file2.txt", FILE2.as_bytes()),
        ("Fs/.DS_Store", &b"\x00\x00\x00\x01Bud1"[..]),
    ] {
        zip.start_file(name, options).unwrap();
        zip.write_all(content).unwrap();
    }
    zip.add_directory("Fs/subdir1/", options).unwrap();
    zip.start_file("Fs/subdir1/file1_renamed.txt", options).unwrap();
    zip.write_all(b"renamed\n").unwrap();
    zip.start_file("Fs/start.sh", options).unwrap();
    zip.write_all(b"#!/bin/sh\necho start\n").unwrap();
    zip.finish().unwrap();
}

fn options_in(dir: &TempDir) -> ShellOptions {
    let archive_path = dir.path().join("Fs.zip");
    write_archive(&archive_path);
    ShellOptions {
        username: "test_user".to_string(),
        archive_path,
        log_path: dir.path().join("log.csv"),
        snapshot_path: dir.path().join("filesystem.json"),
        ..Default::default()
    }
}

fn log_rows(dir: &TempDir) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(dir.path().join("log.csv"))
        .unwrap();
    reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect()
}

#[test]
fn test_loads_archive_and_lists_home() {
    let dir = tempdir().unwrap();
    let mut shell = ShellEmulator::new(options_in(&dir)).unwrap();

    let listing = shell.execute("ls").unwrap().output;
    let mut names: Vec<&str> = listing.lines().collect();
    names.sort();
    assert_eq!(names, vec![".DS_Store", "file2.txt", "start.sh", "subdir1"]);
    assert_eq!(shell.navigator().display_path(), "/Fs");
}

#[test]
fn test_wc_and_tree_on_archive() {
    let dir = tempdir().unwrap();
    let mut shell = ShellEmulator::new(options_in(&dir)).unwrap();

    assert_eq!(
        shell.execute("wc file2.txt").unwrap().output,
        "3 lines, 9 words, 41 characters"
    );
    assert_eq!(
        shell.execute("tree").unwrap().output,
        "├── file2.txt\n├── .DS_Store\n├── subdir1\n│   └── file1_renamed.txt\n└── start.sh"
    );
}

#[test]
fn test_every_line_is_logged() {
    let dir = tempdir().unwrap();
    let mut shell = ShellEmulator::new(options_in(&dir)).unwrap();
    let input = "ls\nfrobnicate\nwc\nexit\n";
    let mut output = Vec::new();
    run_repl(&mut shell, input.as_bytes(), &mut output).unwrap();

    let rows = log_rows(&dir);
    let commands: Vec<&str> = rows.iter().map(|r| r[1].as_str()).collect();
    assert_eq!(commands, vec!["ls", "frobnicate", "wc", "exit"]);
    assert!(rows.iter().all(|r| r[0] == "test_user" && r[2].len() == 19));

    let text = String::from_utf8(output).unwrap();
    assert!(text.contains("Unknown command: frobnicate"));
    assert!(text.contains("Error: wc requires a filename."));
    assert!(text.ends_with("Exiting emulator...\n"));
}

#[test]
fn test_snapshot_carries_chmod_across_sessions() {
    let dir = tempdir().unwrap();
    {
        let mut shell = ShellEmulator::new(options_in(&dir)).unwrap();
        shell.execute("chmod rwxr-xr-- file2.txt").unwrap();
        shell.save_snapshot().unwrap();
    }

    let shell = ShellEmulator::new(options_in(&dir)).unwrap();
    let file = shell.tree().descend(&["Fs"]).unwrap().get_file("file2.txt").unwrap();
    assert_eq!(file.permissions, "rwxr-xr--");
}

#[test]
fn test_snapshot_is_never_written_implicitly() {
    let dir = tempdir().unwrap();
    let mut shell = ShellEmulator::new(options_in(&dir)).unwrap();
    shell.execute("chmod rwxr-xr-- file2.txt").unwrap();
    shell.execute("exit").unwrap();
    assert!(!dir.path().join("filesystem.json").exists());
}

#[test]
fn test_sibling_cd_mode() {
    let dir = tempdir().unwrap();
    let options = ShellOptions {
        cd_mode: CdMode::Sibling,
        ..options_in(&dir)
    };
    let mut shell = ShellEmulator::new(options).unwrap();

    assert_eq!(shell.execute("cd subdir1").unwrap().output, "");
    assert_eq!(shell.navigator().display_path(), "/Fs/subdir1");
    assert_eq!(shell.execute("cd ..").unwrap().output, "");
    assert_eq!(shell.navigator().display_path(), "/Fs");
}

#[test]
fn test_missing_archive_is_fatal() {
    let dir = tempdir().unwrap();
    let options = ShellOptions {
        archive_path: dir.path().join("nope.zip"),
        log_path: dir.path().join("log.csv"),
        snapshot_path: dir.path().join("filesystem.json"),
        ..Default::default()
    };
    assert!(ShellEmulator::new(options).is_err());
}
