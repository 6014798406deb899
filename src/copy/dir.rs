//! Directory tree copy.
//!
//! [`copy_files`] walks the source tree top-down, skips excluded entries,
//! and copies every remaining file to its mirrored or flattened destination,
//! recording one outcome per file.

use crate::error::{Error, ErrorCode, Result};
use crate::options::CopyOptions;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use super::file::copy_file;
use super::utils::destination_for;
use super::walk::{Walk, WalkError};

/// A file (or unreadable directory) that could not be copied.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FailedCopy {
    /// Path relative to the source root
    pub path: PathBuf,
    /// Human-readable description of the failure
    pub message: String,
    /// Machine-readable classification
    pub code: ErrorCode,
}

impl FailedCopy {
    fn new(path: PathBuf, error: &Error) -> Self {
        Self {
            path,
            message: error.to_string(),
            code: error.code(),
        }
    }
}

impl fmt::Display for FailedCopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Error: {})", self.path.display(), self.message)
    }
}

/// Per-file results of a copy run.
///
/// Every file below the source root that was not excluded appears exactly
/// once, either in `succeeded` or in `failed`, in processing order.
///
/// # Example
///
/// ```no_run
/// use treecopy::{copy_files, CopyOptions};
/// use std::path::Path;
///
/// let outcome = copy_files(Path::new("src"), Path::new("dst"), &CopyOptions::default())?;
/// for path in &outcome.succeeded {
///     println!("copied {}", path.display());
/// }
/// for failure in &outcome.failed {
///     println!("failed {failure}");
/// }
/// # Ok::<(), treecopy::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CopyOutcome {
    /// Relative paths of files copied successfully
    pub succeeded: Vec<PathBuf>,
    /// Relative paths that failed, with the reason
    pub failed: Vec<FailedCopy>,
    /// Total bytes written
    pub bytes_copied: u64,
    /// Duration of the copy operation
    pub duration: Duration,
}

impl CopyOutcome {
    /// Whether no failure was recorded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Number of recorded outcomes.
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.failed.len()
    }
}

/// Copy every non-excluded file below `src` into `dst`.
///
/// # Strategy
///
/// 1. Validate the source root and check that it can be listed
/// 2. Create `dst` with all missing parents (an existing directory is fine)
/// 3. Walk `src` top-down, pruning ignored directory names before descending
/// 4. For each file not matching an ignored pattern, copy it to its
///    mirrored or flattened destination, creating parents in mirrored mode
///
/// A failure on one file is recorded in [`CopyOutcome::failed`] and the walk
/// continues. A subdirectory that cannot be listed is recorded the same way
/// under its own relative path.
///
/// # Errors
///
/// Returns an error only when the run cannot start:
/// - Source does not exist ([`Error::SourceNotFound`])
/// - Source is not a directory ([`Error::NotADirectory`])
/// - Source root cannot be listed ([`Error::ReadDir`])
/// - Destination root cannot be created ([`Error::CreateDirectory`])
/// - Destination root is the source root ([`Error::DestinationIsSource`])
pub fn copy_files(src: &Path, dst: &Path, options: &CopyOptions) -> Result<CopyOutcome> {
    let start_time = Instant::now();

    match fs::metadata(src) {
        Ok(meta) if !meta.is_dir() => return Err(Error::NotADirectory(src.to_path_buf())),
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::SourceNotFound(src.to_path_buf()));
        }
        Err(source) => {
            return Err(Error::ReadDir {
                path: src.to_path_buf(),
                source,
            });
        }
    }
    // A root that exists but cannot be listed must fail before `dst` is created
    fs::read_dir(src).map_err(|source| Error::ReadDir {
        path: src.to_path_buf(),
        source,
    })?;

    fs::create_dir_all(dst).map_err(|source| Error::CreateDirectory {
        path: dst.to_path_buf(),
        source,
    })?;

    let exclude = nested_destination(src, dst)?;
    let filter = options.filter();
    let walk = Walk::new(src, &filter, options, exclude)?;

    let mut outcome = CopyOutcome::default();

    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(WalkError { relative, error }) => {
                options.warn(&format!("Failed to read {}: {}", relative.display(), error));
                outcome.failed.push(FailedCopy::new(relative, &error));
                continue;
            }
        };

        for name in &entry.files {
            if filter.is_ignored_file(name) {
                options.verbose(&format!(
                    "excluded {}",
                    entry.relative.join(name).display()
                ));
                continue;
            }

            let relative = entry.relative.join(name);
            let src_file = entry.path.join(name);
            let dst_file = destination_for(dst, &relative, options);

            match copy_one(&src_file, &dst_file, options) {
                Ok(bytes) => {
                    options.verbose(&format!(
                        "copied {} -> {} ({} bytes)",
                        src_file.display(),
                        dst_file.display(),
                        bytes
                    ));
                    outcome.bytes_copied += bytes;
                    outcome.succeeded.push(relative);
                }
                Err(e) => {
                    options.warn(&format!("Failed to copy {}: {}", src_file.display(), e));
                    outcome.failed.push(FailedCopy::new(relative, &e));
                }
            }
        }
    }

    outcome.duration = start_time.elapsed();
    Ok(outcome)
}

fn copy_one(src_file: &Path, dst_file: &Path, options: &CopyOptions) -> Result<u64> {
    if !options.flatten {
        if let Some(parent) = dst_file.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    copy_file(src_file, dst_file, options)
}

/// Canonical destination root when it sits inside the source tree.
fn nested_destination(src: &Path, dst: &Path) -> Result<Option<PathBuf>> {
    let src = fs::canonicalize(src)?;
    let dst = fs::canonicalize(dst)?;
    if dst == src {
        return Err(Error::DestinationIsSource(dst));
    }
    Ok(dst.starts_with(&src).then_some(dst))
}

// =============================================================================
// Tests
// =============================================================================
