//! # treecopy
//!
//! Recursive directory copying with name-based exclusions and an optional
//! flattened output layout.
//!
//! ## Core Features
//!
//! - **Directory pruning**: directories with an ignored base name are skipped with their whole subtree
//! - **Suffix patterns**: files are skipped by literal suffix (`*.log`, `.DS_Store`)
//! - **Flattening**: every file can land directly in the destination root, its
//!   relative path joined with a configurable separator (`a/b/c.txt` → `a_b_c.txt`)
//! - **Per-file outcomes**: one file's failure is recorded and the copy continues
//! - **Atomic writes**: uses temp file + rename so no partially written file sits at a destination name
//! - **Metadata preserving**: copies file permissions and modification/access times
//!
//! ## Quick Start with Builder API
//!
//! ```no_run
//! use treecopy::CopyBuilder;
//!
//! let outcome = CopyBuilder::new("project", "result")
//!     .ignore_dirs([".git", "node_modules"])
//!     .ignore_pattern("*.log")
//!     .run()?;
//! println!(
//!     "Copied {} files, {} failed",
//!     outcome.succeeded.len(),
//!     outcome.failed.len()
//! );
//! # Ok::<(), treecopy::Error>(())
//! ```
//!
//! ## Function API
//!
//! ```no_run
//! use treecopy::{copy_files, CopyOptions};
//! use std::path::Path;
//!
//! let options = CopyOptions::default()
//!     .with_ignored_dirs([".git"])
//!     .with_flatten("-");
//!
//! let outcome = copy_files(Path::new("src"), Path::new("flat"), &options)?;
//! for failure in &outcome.failed {
//!     eprintln!("✗ {failure}");
//! }
//! # Ok::<(), treecopy::Error>(())
//! ```
//!
//! ## Error Model
//!
//! [`copy_files`] returns `Err` only when the run cannot start: the source is
//! missing, not a directory, unreadable, or the destination root cannot be
//! created. Everything after that is reported per file in [`CopyOutcome`].
//!
//! ## Flattening Collisions
//!
//! Two source files can flatten to the same name (`a/x.txt` and `a_x.txt`
//! with separator `_`). The file processed last overwrites the earlier one;
//! both are reported as copied.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `tracing` | Structured logging with tracing crate |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`], Serialize for [`CopyOutcome`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod copy;
mod error;
mod filter;
mod options;

pub use builder::CopyBuilder;
pub use copy::{CopyOutcome, FailedCopy, copy_file, copy_files, destination_for, flattened_name};
pub use error::{Error, ErrorCode, Result, is_no_space_error};
pub use filter::{DEFAULT_IGNORED_DIRS, DEFAULT_IGNORED_PATTERNS, EntryFilter, IgnorePattern};
pub use options::CopyOptions;
