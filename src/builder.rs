//! Builder API for ergonomic copying operations.
//!
//! A [`CopyBuilder`] is one copy request: a source root, a destination root,
//! and the [`CopyOptions`] for the run. It is often more convenient than
//! constructing the options by hand.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```no_run
//! use treecopy::CopyBuilder;
//!
//! let outcome = CopyBuilder::new("project", "result").run()?;
//! println!("Copied {} files", outcome.succeeded.len());
//! # Ok::<(), treecopy::Error>(())
//! ```
//!
//! ## Flattened Copy With Exclusions
//!
//! ```no_run
//! use treecopy::CopyBuilder;
//!
//! let outcome = CopyBuilder::new("project", "flat")
//!     .ignore_dirs([".git", "node_modules"])
//!     .ignore_pattern("*.log")
//!     .flatten()
//!     .separator("__")
//!     .run()?;
//!
//! for failure in &outcome.failed {
//!     eprintln!("{failure}");
//! }
//! # Ok::<(), treecopy::Error>(())
//! ```

use crate::copy::{CopyOutcome, copy_files};
use crate::error::Result;
use crate::options::CopyOptions;
use std::path::{Path, PathBuf};

/// A builder for configuring and executing a tree copy.
///
/// # Example
///
/// ```no_run
/// use treecopy::CopyBuilder;
///
/// let outcome = CopyBuilder::new("/data/site", "/tmp/site-files")
///     .ignore_dir(".next")
///     .no_permissions()
///     .run()?;
/// # Ok::<(), treecopy::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CopyBuilder {
    src: PathBuf,
    dst: PathBuf,
    options: CopyOptions,
}

impl CopyBuilder {
    /// Create a new `CopyBuilder` with the given source and destination roots.
    ///
    /// Uses default options: nothing excluded, mirrored layout, permissions
    /// and timestamps preserved.
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Self {
        Self {
            src: src.as_ref().to_path_buf(),
            dst: dst.as_ref().to_path_buf(),
            options: CopyOptions::default(),
        }
    }

    /// Start from existing options.
    #[must_use]
    pub fn with_options(mut self, options: CopyOptions) -> Self {
        self.options = options;
        self
    }

    /// Prune every directory with this base name.
    #[must_use]
    pub fn ignore_dir(self, name: impl Into<String>) -> Self {
        self.ignore_dirs([name])
    }

    /// Prune every directory whose base name is in `names`.
    #[must_use]
    pub fn ignore_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_ignored_dirs(names);
        self
    }

    /// Skip files whose name ends with `pattern` once every `*` is removed.
    #[must_use]
    pub fn ignore_pattern(self, pattern: impl Into<String>) -> Self {
        self.ignore_patterns([pattern])
    }

    /// Skip files matching any of `patterns`.
    #[must_use]
    pub fn ignore_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_ignored_patterns(patterns);
        self
    }

    /// Place every file directly in the destination root.
    ///
    /// Keeps the current separator (`_` unless [`separator`](Self::separator)
    /// was called).
    #[must_use]
    pub fn flatten(mut self) -> Self {
        self.options.flatten = true;
        self
    }

    /// Set the separator used to join path segments when flattening.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.options.separator = separator.into();
        self
    }

    /// Don't preserve file timestamps.
    #[must_use]
    pub fn no_timestamps(mut self) -> Self {
        self.options = self.options.without_timestamps();
        self
    }

    /// Don't preserve file permissions.
    #[must_use]
    pub fn no_permissions(mut self) -> Self {
        self.options = self.options.without_permissions();
        self
    }

    /// Sync each file to disk before renaming it into place.
    #[must_use]
    pub fn fsync(mut self) -> Self {
        self.options = self.options.with_fsync();
        self
    }

    /// Set a handler for warnings.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use treecopy::CopyBuilder;
    ///
    /// let outcome = CopyBuilder::new("src", "dst")
    ///     .on_warning(|msg| eprintln!("Warning: {}", msg))
    ///     .run()?;
    /// # Ok::<(), treecopy::Error>(())
    /// ```
    #[must_use]
    pub fn on_warning(mut self, handler: fn(&str)) -> Self {
        self.options = self.options.with_warn_handler(handler);
        self
    }

    /// Set a handler for per-file progress messages.
    #[must_use]
    pub fn on_verbose(mut self, handler: fn(&str)) -> Self {
        self.options = self.options.with_verbose_handler(handler);
        self
    }

    /// Get a reference to the current options.
    pub fn options(&self) -> &CopyOptions {
        &self.options
    }

    /// Execute the copy.
    ///
    /// # Errors
    ///
    /// Returns an error only when the run cannot start; see [`copy_files`].
    /// Per-file failures are reported in [`CopyOutcome::failed`].
    pub fn run(self) -> Result<CopyOutcome> {
        copy_files(&self.src, &self.dst, &self.options)
    }
}
