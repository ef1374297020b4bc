//! Repository root resolution.
//!
//! Summaries land under `<repo-root>/public/analysis`. `RepoRootResolver`
//! finds that root from an explicit path or by walking up from a start
//! directory until one of the configured marker files is found.
//!
//! # Example
//!
//! ```no_run
//! use nbsum_core::util::resolver::RepoRootResolver;
//!
//! let resolver = RepoRootResolver::new().with_markers(&["astro.config.mjs", ".git"]);
//! if let Some(root) = resolver.resolve() {
//!     println!("Repo root: {:?}", root);
//! }
//! ```

use std::path::{Path, PathBuf};

use crate::util::paths::{expand_tilde, find_dir_with_marker};

/// Marker files that identify a site repository root by default.
pub const DEFAULT_MARKERS: &[&str] = &["package.json", ".git"];

/// Locates the repository root that owns `public/analysis`.
#[derive(Debug, Clone)]
pub struct RepoRootResolver {
    /// Explicit root (expanded with tilde); wins over marker search
    explicit_root: Option<PathBuf>,
    /// Marker files to identify the root, tried in order
    markers: Vec<String>,
}

impl Default for RepoRootResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RepoRootResolver {
    /// Create a resolver using [`DEFAULT_MARKERS`].
    pub fn new() -> Self {
        Self {
            explicit_root: None,
            markers: DEFAULT_MARKERS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Use an explicit root (supports ~ expansion).
    pub fn with_root(mut self, root: &str) -> Self {
        self.explicit_root = Some(expand_tilde(root));
        self
    }

    /// Replace the marker files that identify the root.
    pub fn with_markers(mut self, markers: &[&str]) -> Self {
        self.markers = markers.iter().map(|s| (*s).to_string()).collect();
        self
    }

    /// Markers in search order.
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// Resolve the root, searching upward from `start`.
    ///
    /// Checks in order:
    /// 1. The explicit root, if set and it exists
    /// 2. Each marker, walking up from `start`
    pub fn resolve_from(&self, start: &Path) -> Option<PathBuf> {
        if let Some(root) = &self.explicit_root {
            if root.exists() {
                return Some(root.clone());
            }
            log::warn!("Configured repo root {} does not exist", root.display());
        }

        self.markers
            .iter()
            .find_map(|marker| find_dir_with_marker(start, marker))
    }

    /// Resolve the root, searching upward from the current directory.
    pub fn resolve(&self) -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        self.resolve_from(&cwd)
    }
}
