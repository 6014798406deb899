//! Top-down directory traversal with pruning.
//!
//! [`Walk`] yields one [`TraversalEntry`] per visited directory, parent before
//! children, in the order the filesystem enumerates them. Ignored directory
//! names are removed from each entry's child list before descending, so a
//! pruned subtree is never opened.

use crate::error::{Error, Result};
use crate::filter::EntryFilter;
use crate::options::CopyOptions;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// A visited directory with its immediate children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TraversalEntry {
    /// Path of the directory on disk (source root joined with `relative`)
    pub path: PathBuf,
    /// Path relative to the source root; empty for the root itself
    pub relative: PathBuf,
    /// Child directory names that will be descended into
    pub dirs: Vec<OsString>,
    /// Child file names, including symlinks to files and broken symlinks
    pub files: Vec<OsString>,
}

/// A subdirectory below the root that could not be listed.
#[derive(Debug)]
pub(crate) struct WalkError {
    pub relative: PathBuf,
    pub error: Error,
}

/// Pre-order traversal of a source tree.
pub(crate) struct Walk<'a> {
    root: PathBuf,
    filter: &'a EntryFilter,
    options: &'a CopyOptions,
    /// Canonical path of a directory to leave out (the destination root)
    exclude: Option<PathBuf>,
    first: Option<TraversalEntry>,
    pending: Vec<PathBuf>,
}

impl<'a> Walk<'a> {
    /// Open the root directory.
    ///
    /// Failing to list the root is the only error returned here; failures
    /// further down are yielded by the iterator.
    pub fn new(
        root: &Path,
        filter: &'a EntryFilter,
        options: &'a CopyOptions,
        exclude: Option<PathBuf>,
    ) -> Result<Self> {
        let mut walk = Self {
            root: root.to_path_buf(),
            filter,
            options,
            exclude,
            first: None,
            pending: Vec::new(),
        };
        let first = walk
            .read_entry(PathBuf::new())
            .map_err(|source| Error::ReadDir {
                path: root.to_path_buf(),
                source,
            })?;
        walk.first = Some(first);
        Ok(walk)
    }

    fn read_entry(&self, relative: PathBuf) -> io::Result<TraversalEntry> {
        let path = if relative.as_os_str().is_empty() {
            self.root.clone()
        } else {
            self.root.join(&relative)
        };

        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in fs::read_dir(&path)? {
            // One bad entry must not lose the rest of the listing
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    self.options.warn(&format!(
                        "Failed to read an entry of {}: {}",
                        path.display(),
                        e
                    ));
                    continue;
                }
            };
            let name = entry.file_name();
            let child = entry.path();

            match child_kind(entry.file_type(), &child) {
                ChildKind::DirSymlink => {
                    self.options.verbose(&format!(
                        "not following directory symlink {}",
                        child.display()
                    ));
                }
                ChildKind::SpecialSymlink => {
                    self.options.warn(&format!(
                        "Skipping symlink to special file: {}",
                        child.display()
                    ));
                }
                ChildKind::Dir => {
                    if self.filter.is_ignored_dir(&name) {
                        self.options
                            .verbose(&format!("pruned {}", child.display()));
                    } else if self.is_excluded(&child) {
                        self.options.warn(&format!(
                            "Skipping {}: it is the destination directory",
                            child.display()
                        ));
                    } else {
                        dirs.push(name);
                    }
                }
                ChildKind::File => files.push(name),
                ChildKind::Special => {
                    self.options
                        .warn(&format!("Skipping special file: {}", child.display()));
                }
            }
        }

        Ok(TraversalEntry {
            path,
            relative,
            dirs,
            files,
        })
    }

    fn is_excluded(&self, dir: &Path) -> bool {
        match &self.exclude {
            Some(exclude) => fs::canonicalize(dir).is_ok_and(|c| c == *exclude),
            None => false,
        }
    }

    fn schedule(&mut self, entry: &TraversalEntry) {
        // Reversed so children pop in enumeration order
        for name in entry.dirs.iter().rev() {
            self.pending.push(entry.relative.join(name));
        }
    }
}

/// How a directory child is treated by the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChildKind {
    Dir,
    /// Regular file, symlink to a file, or anything whose type is unknown
    File,
    DirSymlink,
    SpecialSymlink,
    Special,
}

/// Classify a child from its unfollowed file type.
///
/// When the type cannot be read the child is treated as a file, so the copy
/// attempt records the outcome for that one path.
fn child_kind(file_type: io::Result<fs::FileType>, child: &Path) -> ChildKind {
    let Ok(file_type) = file_type else {
        return ChildKind::File;
    };

    if file_type.is_symlink() {
        match fs::metadata(child) {
            Ok(target) if target.is_dir() => ChildKind::DirSymlink,
            Ok(target) if !target.is_file() => ChildKind::SpecialSymlink,
            // Broken links stay in the file list so the copy failure is recorded
            _ => ChildKind::File,
        }
    } else if file_type.is_dir() {
        ChildKind::Dir
    } else if file_type.is_file() {
        ChildKind::File
    } else {
        ChildKind::Special
    }
}

impl Iterator for Walk<'_> {
    type Item = std::result::Result<TraversalEntry, WalkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(first) = self.first.take() {
            self.schedule(&first);
            return Some(Ok(first));
        }

        let relative = self.pending.pop()?;
        match self.read_entry(relative.clone()) {
            Ok(entry) => {
                self.schedule(&entry);
                Some(Ok(entry))
            }
            Err(source) => Some(Err(WalkError {
                error: Error::ReadDir {
                    path: self.root.join(&relative),
                    source,
                },
                relative,
            })),
        }
    }
}
