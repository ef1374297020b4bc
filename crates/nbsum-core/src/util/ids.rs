//! Notebook identifier helpers.
//!
//! The summary writer uses identifiers verbatim; `nbsum write --notebook-file`
//! derives one from the notebook's file name.

use std::path::Path;

/// Derive a notebook ID from a notebook file path.
///
/// Returns the file stem unchanged, so `notebooks/ab-test-analysis.ipynb`
/// maps to `ab-test-analysis`. Returns `None` if the path has no UTF-8 stem.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use nbsum_core::util::ids::notebook_id_from_path;
///
/// assert_eq!(
///     notebook_id_from_path(Path::new("analytics/notebooks/ab-test-analysis.ipynb")),
///     Some("ab-test-analysis".to_string())
/// );
/// assert_eq!(notebook_id_from_path(Path::new("/")), None);
/// ```
pub fn notebook_id_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(String::from)
}
