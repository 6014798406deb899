//! Single file copy operations.
//!
//! Each file is written to a temporary file next to its destination and
//! renamed into place, so the destination name only ever holds a complete
//! copy. An existing destination file is replaced.

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use std::fs::{self, File};
use std::path::Path;

use super::utils::{copy_file_contents, preserve_timestamps};

/// Copy a single file, replacing any file already at `dst`.
///
/// The parent of `dst` must exist. Permissions and timestamps are carried
/// over according to `options`.
///
/// # Returns
///
/// The number of bytes copied.
///
/// # Errors
///
/// Returns an error if:
/// - The source cannot be read, including broken symlinks ([`Error::Io`])
/// - Temp file creation fails, for instance when the parent is missing ([`Error::TempFile`])
/// - The final rename fails, for instance when `dst` is a directory ([`Error::Persist`])
pub fn copy_file(src: &Path, dst: &Path, options: &CopyOptions) -> Result<u64> {
    // Follows symlinks, so a link is copied as its target's content
    let src_meta = fs::metadata(src)?;
    let src_file = File::open(src)?;

    let dst_parent = match dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let created = if options.preserve_permissions {
        // Default tempfile mode (0o600), source permissions are applied below
        tempfile::NamedTempFile::new_in(dst_parent)
    } else {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // 0o666 is reduced by the umask at creation time
            tempfile::Builder::new()
                .permissions(fs::Permissions::from_mode(0o666))
                .tempfile_in(dst_parent)
        }
        #[cfg(not(unix))]
        {
            tempfile::NamedTempFile::new_in(dst_parent)
        }
    };
    let temp_file = created.map_err(|source| Error::TempFile {
        path: dst_parent.to_path_buf(),
        source,
    })?;

    let bytes_copied = copy_file_contents(&src_file, temp_file.as_file())?;

    if options.fsync {
        temp_file.as_file().sync_all()?;
    }

    if options.preserve_permissions {
        fs::set_permissions(temp_file.path(), src_meta.permissions())?;
    }

    temp_file.persist(dst).map_err(|e| Error::Persist {
        path: dst.to_path_buf(),
        source: e.error,
    })?;

    if options.preserve_timestamps {
        if let Err(e) = preserve_timestamps(&src_meta, dst) {
            options.warn(&format!(
                "Failed to preserve timestamps on {}: {}",
                dst.display(),
                e
            ));
        }
    }

    Ok(bytes_copied)
}

// =============================================================================
// Tests
// =============================================================================
