//! Source directory scanning backend
//!
//! Uses walkdir for recursive traversal. Entries are sorted by file name within
//! each directory so repeated runs see files in the same order.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::ConcatError;

/// Fail unless `dir` is an existing directory
pub fn validate_source(dir: &Path) -> Result<(), ConcatError> {
    if dir.is_dir() {
        return Ok(());
    }

    Err(ConcatError::SourceNotFound {
        path: dir.to_path_buf(),
        cwd: std::env::current_dir().unwrap_or_default(),
    })
}

/// Walk `dir` recursively, yielding every file below it
///
/// Symlinks are yielded unless they resolve to a directory, so a dangling
/// link reaches the reader and fails there; symlinked directories are not
/// descended into. Unreadable entries come through as [`ConcatError::Walk`]
/// so the caller can report them and carry on.
pub fn walk(dir: &Path) -> impl Iterator<Item = Result<PathBuf, ConcatError>> {
    let root = dir.to_path_buf();

    WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(entry) => {
                let path = entry.path();
                if entry.file_type().is_file()
                    || (entry.path_is_symlink() && !path.is_dir())
                {
                    Some(Ok(entry.into_path()))
                } else {
                    None
                }
            }
            Err(e) => {
                let path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.clone());
                Some(Err(ConcatError::Walk { path, source: e }))
            }
        })
}
