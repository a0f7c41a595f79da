//! Static asset copying.

use std::fs;
use std::path::Path;

use crate::error::SiteError;

/// Recursively copy the static directory into the output directory.
///
/// Regular files are copied as-is and subdirectories are descended into.
/// Entries that are neither, such as sockets or dangling links, are skipped
/// with a warning. Hidden entries are copied like any other; filtering
/// applies to content, not assets.
///
/// Returns the number of files copied.
///
/// # Errors
///
/// Returns [`SiteError::NotFound`] if the static directory does not exist
/// and [`SiteError::NotADirectory`] if it is not a directory.
pub fn copy_assets(static_dir: &Path, output_dir: &Path) -> Result<usize, SiteError> {
    if !static_dir.exists() {
        return Err(SiteError::NotFound(static_dir.to_path_buf()));
    }
    if !static_dir.is_dir() {
        return Err(SiteError::NotADirectory(static_dir.to_path_buf()));
    }
    fs::create_dir_all(output_dir)?;
    copy_directory(static_dir, output_dir)
}

fn copy_directory(from: &Path, to: &Path) -> Result<usize, SiteError> {
    let mut copied = 0;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let source = entry.path();
        let target = to.join(entry.file_name());
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
            copied += copy_directory(&source, &target)?;
        } else if file_type.is_file() {
            tracing::debug!(source = %source.display(), target = %target.display(), "Copying asset");
            fs::copy(&source, &target)?;
            copied += 1;
        } else {
            tracing::warn!(path = %source.display(), "Skipping unsupported directory entry");
        }
    }
    Ok(copied)
}
