//! Error types for nbsum-core

use thiserror::Error;

/// Result type alias for nbsum operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing or reading summaries.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Filesystem error, passed through untouched.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML serialization or deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// The underlying I/O error kind, if this is a filesystem error.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Error::Io(e) => Some(e.kind()),
            _ => None,
        }
    }
}
