//! Utility functions for file copy operations.
//!
//! This module contains the destination path computation shared by the
//! flattened and mirrored layouts, plus content and timestamp helpers.

use crate::options::CopyOptions;
use filetime::{FileTime, set_file_times};
use std::ffi::OsString;
use std::fs::{File, Metadata};
use std::io::{self, BufReader};
use std::path::{Component, Path, PathBuf};

// =============================================================================
// Destination paths
// =============================================================================

/// Join the segments of a relative path into a single file name.
///
/// ```
/// use std::path::Path;
/// use treecopy::flattened_name;
///
/// assert_eq!(flattened_name(Path::new("a/b/c.txt"), "-"), "a-b-c.txt");
/// assert_eq!(flattened_name(Path::new("top.txt"), "-"), "top.txt");
/// ```
pub fn flattened_name(relative: &Path, separator: &str) -> OsString {
    let mut name = OsString::new();
    for (i, segment) in relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(segment) => Some(segment),
            _ => None,
        })
        .enumerate()
    {
        if i > 0 {
            name.push(separator);
        }
        name.push(segment);
    }
    name
}

/// Where a file at `relative` (below the source root) lands under `dest_root`.
///
/// Mirrored layout keeps the relative path; flattened layout uses
/// [`flattened_name`] directly under `dest_root`.
pub fn destination_for(dest_root: &Path, relative: &Path, options: &CopyOptions) -> PathBuf {
    if options.flatten {
        dest_root.join(flattened_name(relative, &options.separator))
    } else {
        dest_root.join(relative)
    }
}

// =============================================================================
// File content copying
// =============================================================================

/// Copy file contents.
///
/// `io::copy` between two files uses `copy_file_range`/`sendfile` on Linux
/// and falls back to a buffered copy elsewhere.
pub(crate) fn copy_file_contents(src: &File, dst: &File) -> io::Result<u64> {
    io::copy(&mut BufReader::new(src), &mut &*dst)
}

// =============================================================================
// Metadata and timestamp utilities
// =============================================================================

/// Preserve file timestamps (mtime and atime)
pub(crate) fn preserve_timestamps(src_meta: &Metadata, dst: &Path) -> io::Result<()> {
    let mtime = FileTime::from_last_modification_time(src_meta);
    let atime = FileTime::from_last_access_time(src_meta);
    set_file_times(dst, atime, mtime)
}

// =============================================================================
// Tests
// =============================================================================
