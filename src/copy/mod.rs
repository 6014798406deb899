//! Core copy operations.
//!
//! This module provides the tree traversal, per-file copy, and destination
//! path computation behind [`copy_files`].

mod dir;
mod file;
mod utils;
mod walk;

// Re-export public API
pub use dir::{CopyOutcome, FailedCopy, copy_files};
pub use file::copy_file;
pub use utils::{destination_for, flattened_name};
