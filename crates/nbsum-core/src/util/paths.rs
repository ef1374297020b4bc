//! Generic path utilities.

use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a directory that contains `marker`.
///
/// `start` itself is checked first. The marker may be a file or directory
/// name, or a relative path such as `public/analysis`.
pub fn find_dir_with_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).exists())
        .map(Path::to_path_buf)
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Render `path` relative to `base` for display, falling back to the full path.
pub fn display_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
