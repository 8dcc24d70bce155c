//! Path resolution utilities for CLI commands

use std::env;
use std::path::{Path, PathBuf};

/// Directory that config discovery and relative data paths start from.
///
/// Falls back to "." if the current directory cannot be determined.
pub fn resolve_root_path() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolve a path given on the command line against `root`.
pub fn resolve_against(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
