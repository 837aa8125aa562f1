//! Recursive directory walk.
//!
//! Collects every regular file below a root directory. Directories are
//! descended into, symlinks and special files are skipped, and the first
//! unreadable entry aborts the walk: callers get either the complete list or
//! an error, never a partial result.

use crate::error::{Result, ViewerError};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Walk `root` and return the paths of all regular files beneath it.
///
/// Paths are absolute whenever `root` is. Their order follows the
/// filesystem's directory listing and is not otherwise defined.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(ViewerError::DirectoryNotFound(root.to_path_buf()));
    }

    let start = std::time::Instant::now();
    let mut files = Vec::new();
    let mut skipped = 0usize;

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        let file_type = entry.file_type();

        if file_type.is_file() {
            files.push(entry.into_path());
        } else if !file_type.is_dir() {
            trace!("Skipping non-regular entry {:?}", entry.path());
            skipped += 1;
        }
    }

    debug!(
        "Scanned {:?}: {} files, {} skipped in {:?}",
        root,
        files.len(),
        skipped,
        start.elapsed()
    );

    Ok(files)
}
