//! Common helper functions for the bump command
//!
//! Path resolution and whole-file I/O with errors tagged by path.

use crate::error::BumpverError;
use std::path::{Path, PathBuf};

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
/// Wrong argument count; produced by clap before any command runs
pub const EXIT_USAGE: i32 = 2;

/// Resolves `path` against `root` unless it is already absolute
pub(crate) fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// Reads a whole document into memory
pub(crate) fn read_document(path: &Path) -> Result<String, BumpverError> {
    std::fs::read_to_string(path).map_err(|e| BumpverError::io(path, e))
}

/// Writes a whole document back
pub(crate) fn write_document(path: &Path, text: &str) -> Result<(), BumpverError> {
    std::fs::write(path, text).map_err(|e| BumpverError::io(path, e))
}
