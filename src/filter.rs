//! Directory-name and file-name exclusion rules.
//!
//! Two kinds of rules exist:
//!
//! - **Ignored directories** are exact base-name matches. A directory whose
//!   name is in the set is pruned together with its whole subtree.
//! - **Ignored patterns** are literal suffix rules. Every `*` is removed from
//!   the pattern and a file is excluded when its name ends with what remains.
//!   `*.log` excludes `app.log`; `temp*` becomes the suffix `temp` and excludes
//!   `mytemp`, not `temp.txt`. This is intentionally not a glob engine.
//!
//! # Example
//!
//! ```
//! use treecopy::{EntryFilter, IgnorePattern};
//!
//! let filter = EntryFilter::new([".git"], ["*.log"]);
//! assert!(filter.is_ignored_dir(".git".as_ref()));
//! assert!(filter.is_ignored_file("debug.log".as_ref()));
//! assert!(!filter.is_ignored_file("notes.txt".as_ref()));
//!
//! assert!(IgnorePattern::new(".DS_Store").matches(".DS_Store".as_ref()));
//! ```

use std::collections::BTreeSet;
use std::ffi::OsStr;

/// Directory names excluded by the command-line front end.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[".git", "node_modules", "__pycache__", ".next"];

/// File patterns excluded by the command-line front end.
pub const DEFAULT_IGNORED_PATTERNS: &[&str] =
    &["*.pyc", "*.log", ".DS_Store", "*.sql", "*.mjs", "*.json"];

/// A file-name suffix rule.
///
/// The rule keeps the original pattern text for display and the literal
/// suffix used for matching. A pattern made only of `*` has an empty suffix
/// and matches every file.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IgnorePattern {
    pattern: String,
    suffix: String,
}

impl IgnorePattern {
    /// Build a rule from pattern text such as `*.log`.
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let suffix = pattern.replace('*', "");
        Self { pattern, suffix }
    }

    /// The pattern as it was given.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The literal suffix a matching file name must end with.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether `name` ends with this rule's suffix.
    ///
    /// Names that are not valid UTF-8 are compared lossily.
    pub fn matches(&self, name: &OsStr) -> bool {
        match name.to_str() {
            Some(name) => name.ends_with(&self.suffix),
            None => name.to_string_lossy().ends_with(&self.suffix),
        }
    }
}

/// The combined exclusion rules applied during one copy run.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    dirs: BTreeSet<String>,
    patterns: Vec<IgnorePattern>,
}

impl EntryFilter {
    /// Build a filter from directory names and file patterns.
    pub fn new<D, P>(dirs: D, patterns: P) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let mut patterns: Vec<IgnorePattern> =
            patterns.into_iter().map(IgnorePattern::new).collect();
        patterns.sort();
        patterns.dedup();
        Self {
            dirs: dirs.into_iter().map(Into::into).collect(),
            patterns,
        }
    }

    /// Whether a directory with this base name is pruned.
    pub fn is_ignored_dir(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|name| self.dirs.contains(name))
    }

    /// Whether a file with this base name is skipped.
    pub fn is_ignored_file(&self, name: &OsStr) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    /// Ignored directory names, sorted.
    pub fn dirs(&self) -> impl Iterator<Item = &str> {
        self.dirs.iter().map(String::as_str)
    }

    /// Ignored patterns, sorted by pattern text.
    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }
}
