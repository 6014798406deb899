//! Error types for treecopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during copy operations, the [`Result`] type alias, and the
//! stable [`ErrorCode`] classification used by machine-readable output.
//!
//! # Error Categories
//!
//! | Category | Errors | Scope |
//! |----------|--------|-------|
//! | Validation | [`Error::SourceNotFound`], [`Error::NotADirectory`], [`Error::DestinationIsSource`] | top-level |
//! | Traversal | [`Error::ReadDir`] | top-level (root) or per-directory |
//! | Destination | [`Error::CreateDirectory`] | top-level (root) or per-file |
//! | IO | [`Error::Io`], [`Error::TempFile`], [`Error::Persist`] | per-file |
//!
//! Top-level errors are returned from [`copy_files`](crate::copy_files) as
//! `Err`. Per-file errors never escape: they are recorded in the
//! [`CopyOutcome`](crate::CopyOutcome) and traversal continues.

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for treecopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Check if an IO error indicates "no space left on device".
///
/// # Platform Support
///
/// | Platform | Error Detection |
/// |----------|-----------------|
/// | Unix | `ENOSPC` (errno 28) |
/// | Windows | `ERROR_DISK_FULL` (0x70) |
///
/// # Example
///
/// ```no_run
/// use std::io;
/// use treecopy::is_no_space_error;
///
/// let error = io::Error::new(io::ErrorKind::StorageFull, "disk full");
/// assert!(is_no_space_error(&error));
/// ```
pub fn is_no_space_error(error: &io::Error) -> bool {
    if error.kind() == io::ErrorKind::StorageFull {
        return true;
    }

    #[cfg(unix)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ENOSPC: i32 = 28;
            return raw_error == ENOSPC;
        }
    }

    #[cfg(windows)]
    {
        if let Some(raw_error) = error.raw_os_error() {
            const ERROR_DISK_FULL: i32 = 112;
            return raw_error == ERROR_DISK_FULL;
        }
    }

    false
}

/// Stable, machine-readable classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[non_exhaustive]
pub enum ErrorCode {
    /// The source root does not exist
    SourceNotFound,
    /// The source root is not a directory
    NotADirectory,
    /// The operating system refused access
    PermissionDenied,
    /// The destination ran out of space
    NoSpace,
    /// Any other IO failure
    IoError,
    /// Invalid arguments
    InvalidInput,
    /// A failure that is not the caller's or the filesystem's fault
    Internal,
}

impl ErrorCode {
    /// The snake_case name of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SourceNotFound => "source_not_found",
            Self::NotADirectory => "not_a_directory",
            Self::PermissionDenied => "permission_denied",
            Self::NoSpace => "no_space",
            Self::IoError => "io_error",
            Self::InvalidInput => "invalid_input",
            Self::Internal => "internal",
        }
    }

    /// Classify a raw IO error.
    pub fn from_io(error: &io::Error) -> Self {
        if is_no_space_error(error) {
            Self::NoSpace
        } else if error.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied
        } else {
            Self::IoError
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur during copy operations.
///
/// All errors include relevant path information to aid debugging.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source path does not exist
    #[error("Source path does not exist: {0}")]
    SourceNotFound(PathBuf),

    /// Source is not a directory
    #[error("Source is not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Destination root resolves to the source root
    #[error("Destination is the source directory: {0}")]
    DestinationIsSource(PathBuf),

    /// A directory could not be listed
    #[error("Failed to read directory {path}: {source}")]
    ReadDir {
        /// Directory that could not be read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// A destination directory could not be created
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Failed to create temporary file
    #[error("Failed to create temporary file in {path}: {source}")]
    TempFile {
        /// Directory where temp file creation was attempted
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Failed to persist temporary file
    #[error("Failed to persist temporary file to {path}: {source}")]
    Persist {
        /// Target path
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },
}

impl Error {
    /// Classify this error for machine-readable reporting.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SourceNotFound(_) => ErrorCode::SourceNotFound,
            Self::NotADirectory(_) => ErrorCode::NotADirectory,
            Self::DestinationIsSource(_) => ErrorCode::InvalidInput,
            Self::Io(source)
            | Self::ReadDir { source, .. }
            | Self::CreateDirectory { source, .. }
            | Self::TempFile { source, .. }
            | Self::Persist { source, .. } => ErrorCode::from_io(source),
        }
    }
}
