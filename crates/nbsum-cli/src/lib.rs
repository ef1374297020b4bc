//! # nbsum-cli
//!
//! Command-line front end for notebook summaries. Notebooks that are not
//! written in Rust call `nbsum write` with a JSON or YAML payload at the end
//! of a run; `nbsum list` shows what the site build will pick up.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command, GlobalArgs};
pub use commands::run;
