//! nbsum Core — shared errors, configuration, and utilities.
//!
//! This crate has no internal nbsum dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: TOML configuration for locating the output root
//! - [`util`]: Path, repo root, and ID utilities

pub mod config;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use config::NbsumConfig;
pub use error::{Error, Result};

pub use util::ids::notebook_id_from_path;
pub use util::resolver::RepoRootResolver;
