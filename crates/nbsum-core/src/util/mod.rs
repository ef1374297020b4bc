//! Utility modules for path handling and ID computation.
//!
//! # Modules
//!
//! - [`ids`]: Notebook ID derivation
//! - [`paths`]: Generic path utilities (marker search, tilde expansion)
//! - [`resolver`]: Repository root resolution

pub mod ids;
pub mod paths;
pub mod resolver;
