//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A test fixture that provides source and destination directories.
pub struct TestFixture {
    pub src: TempDir,
    pub dst: TempDir,
}

impl TestFixture {
    /// Create a new test fixture with fresh source and destination directories.
    pub fn new() -> Self {
        Self {
            src: TempDir::new().expect("Failed to create temp source dir"),
            dst: TempDir::new().expect("Failed to create temp dest dir"),
        }
    }

    /// Output directory inside the destination temp dir (not created yet).
    pub fn out(&self) -> PathBuf {
        self.dst.path().join("out")
    }

    /// Write files below the source root, creating parent directories.
    pub fn create_tree(&self, files: &[(&str, &str)]) {
        for (relative, content) in files {
            let path = self.src.path().join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).expect("Failed to create directory");
            }
            fs::write(&path, content).expect("Failed to write file");
        }
    }

    /// Check if a file exists and has the expected content.
    pub fn assert_file_content(&self, path: &Path, expected: &str) {
        assert!(path.exists(), "File does not exist: {:?}", path);
        let actual = fs::read_to_string(path).expect("Failed to read file");
        assert_eq!(actual, expected, "File content mismatch");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// All files below `dir`, as sorted `/`-separated relative paths.
pub fn list_files_recursive(dir: &Path) -> Vec<String> {
    fn visit(root: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).expect("Failed to read directory") {
            let path = entry.expect("Failed to read entry").path();
            if path.is_dir() {
                visit(root, &path, out);
            } else {
                let relative = path.strip_prefix(root).expect("Entry outside root");
                let segments: Vec<String> = relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect();
                out.push(segments.join("/"));
            }
        }
    }

    let mut files = Vec::new();
    if dir.is_dir() {
        visit(dir, dir, &mut files);
    }
    files.sort();
    files
}

/// Lines of the human report that start with `marker` (e.g. `✓`), marker stripped.
pub fn report_lines(stdout: &[u8], marker: &str) -> Vec<String> {
    let mut lines: Vec<String> = String::from_utf8_lossy(stdout)
        .lines()
        .filter_map(|line| line.strip_prefix(marker))
        .map(|rest| rest.trim_start().to_owned())
        .collect();
    lines.sort();
    lines
}
