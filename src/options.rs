//! Configuration options for copy operations.
//!
//! This module provides [`CopyOptions`], which together with a source and a
//! destination root forms one copy request. Options are not mutated while a
//! copy runs.
//!
//! # Example
//!
//! ```
//! use treecopy::CopyOptions;
//!
//! let options = CopyOptions::default()
//!     .with_ignored_dirs([".git", "target"])
//!     .with_ignored_patterns(["*.log"])
//!     .with_flatten("-");
//! assert!(options.flatten);
//! ```

use crate::filter::EntryFilter;
use std::collections::BTreeSet;

/// Options for copy operations.
///
/// Use [`Default::default()`] to get an empty exclusion set and a mirrored
/// (non-flattened) layout, then customize using the builder methods.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `ignored_dirs` | empty | Directory names pruned from traversal |
/// | `ignored_patterns` | empty | File-name suffix patterns to skip |
/// | `flatten` | `false` | Mirror the source hierarchy |
/// | `separator` | `"_"` | Joins path segments when flattening |
/// | `preserve_permissions` | `true` | Copy file permissions |
/// | `preserve_timestamps` | `true` | Copy file timestamps (mtime/atime) |
/// | `fsync` | `false` | Sync each file to disk before rename |
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyOptions {
    /// Directory base names excluded together with their subtrees
    pub ignored_dirs: BTreeSet<String>,

    /// File-name patterns; every `*` is stripped and the rest is matched as
    /// a literal suffix
    pub ignored_patterns: BTreeSet<String>,

    /// Whether to place every file directly in the destination root
    ///
    /// The file name becomes the relative path's segments joined with
    /// [`separator`](Self::separator). Distinct sources that map to the same
    /// name overwrite each other; the one processed last wins.
    pub flatten: bool,

    /// Segment separator used only when [`flatten`](Self::flatten) is set
    pub separator: String,

    /// Whether to preserve file permissions (default: true)
    pub preserve_permissions: bool,

    /// Whether to preserve file timestamps (default: true)
    ///
    /// When enabled, the modification time (mtime) and access time (atime)
    /// of copied files are set to match the source files.
    pub preserve_timestamps: bool,

    /// Whether to sync files to disk before renaming them into place
    /// (default: false)
    pub fsync: bool,

    /// Callback for warnings (optional)
    ///
    /// If not set and `tracing` feature is enabled, warnings are logged via tracing.
    /// Otherwise, warnings are silently ignored.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub warn_handler: Option<fn(&str)>,

    /// Callback for per-file progress messages (optional)
    ///
    /// Falls back to `tracing::debug!` like [`warn_handler`](Self::warn_handler).
    #[cfg_attr(feature = "serde", serde(skip))]
    pub verbose_handler: Option<fn(&str)>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            ignored_dirs: BTreeSet::new(),
            ignored_patterns: BTreeSet::new(),
            flatten: false,
            separator: "_".to_owned(),
            preserve_permissions: true,
            preserve_timestamps: true,
            fsync: false,
            warn_handler: None,
            verbose_handler: None,
        }
    }
}

impl CopyOptions {
    /// Create options with a warning handler
    #[must_use]
    pub fn with_warn_handler(mut self, handler: fn(&str)) -> Self {
        self.warn_handler = Some(handler);
        self
    }

    /// Create options with a verbose (per-file) handler
    #[must_use]
    pub fn with_verbose_handler(mut self, handler: fn(&str)) -> Self {
        self.verbose_handler = Some(handler);
        self
    }

    /// Add directory names to prune
    #[must_use]
    pub fn with_ignored_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    /// Add file-name patterns to skip
    #[must_use]
    pub fn with_ignored_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Flatten the output, joining path segments with `separator`
    #[must_use]
    pub fn with_flatten(mut self, separator: impl Into<String>) -> Self {
        self.flatten = true;
        self.separator = separator.into();
        self
    }

    /// Sync each file to disk before it is renamed into place
    #[must_use]
    pub fn with_fsync(mut self) -> Self {
        self.fsync = true;
        self
    }

    /// Disable timestamp preservation
    #[must_use]
    pub fn without_timestamps(mut self) -> Self {
        self.preserve_timestamps = false;
        self
    }

    /// Disable permission preservation
    ///
    /// Copied files then get default umask permissions.
    #[must_use]
    pub fn without_permissions(mut self) -> Self {
        self.preserve_permissions = false;
        self
    }

    /// The exclusion rules these options describe.
    pub fn filter(&self) -> EntryFilter {
        EntryFilter::new(
            self.ignored_dirs.iter().cloned(),
            self.ignored_patterns.iter().cloned(),
        )
    }

    pub(crate) fn warn(&self, msg: &str) {
        if let Some(handler) = self.warn_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::warn!("{}", msg);
        }
    }

    pub(crate) fn verbose(&self, msg: &str) {
        if let Some(handler) = self.verbose_handler {
            handler(msg);
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!("{}", msg);
        }
    }
}
