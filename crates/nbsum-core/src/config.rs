//! Configuration for locating the summary output root.
//!
//! ```toml
//! repo_root = "~/src/site"
//! output_dir = "public/analysis"
//! ```
//!
//! Both keys are optional. A relative `output_dir` is joined onto
//! `repo_root`; an absolute one is used as-is.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::util::paths::expand_tilde;

/// Output directory used under the repo root when none is configured.
pub const DEFAULT_OUTPUT_DIR: &str = "public/analysis";

/// Conventional config file name, looked up in the repo root.
pub const CONFIG_FILE_NAME: &str = "nbsum.toml";

/// nbsum configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NbsumConfig {
    /// Repository root that owns `public/analysis`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_root: Option<PathBuf>,
    /// Output root, relative to `repo_root` unless absolute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl NbsumConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(format!("Invalid config: {e}")))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize configuration back to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// The configured repo root with `~` expanded.
    pub fn repo_root(&self) -> Option<PathBuf> {
        self.repo_root
            .as_ref()
            .map(|p| expand_tilde(&p.to_string_lossy()))
    }

    /// Resolve the output root against a repo root.
    ///
    /// `fallback_root` is used when the config names no `repo_root`.
    /// Returns `None` only when a relative output dir has nothing to be
    /// joined onto.
    pub fn output_root(&self, fallback_root: Option<&Path>) -> Option<PathBuf> {
        let output_dir = self
            .output_dir
            .as_ref()
            .map(|p| expand_tilde(&p.to_string_lossy()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        if output_dir.is_absolute() {
            return Some(output_dir);
        }

        let root = self
            .repo_root()
            .or_else(|| fallback_root.map(Path::to_path_buf))?;
        Some(root.join(output_dir))
    }
}
