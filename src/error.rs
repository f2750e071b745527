//! Error types for codecache
//!
//! All modules use `CodeCacheResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for codecache operations
pub type CodeCacheResult<T> = Result<T, CodeCacheError>;

/// All errors that can occur in codecache
#[derive(Error, Debug)]
pub enum CodeCacheError {
    // Cache errors
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid format in {path}: {reason}")]
    InvalidFormat { path: PathBuf, reason: String },

    #[error("No cached code id for key {key}")]
    CacheMiss { key: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("{0}")]
    User(String),
}

impl CodeCacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid format error for a file
    pub fn invalid_format(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound(_) => {
                Some("Check [paths] in .codecache.toml, or start the test chain first")
            }
            Self::InvalidFormat { .. } => {
                Some("The file is not repaired automatically; fix or delete it and rerun")
            }
            Self::CacheMiss { .. } => Some("Deploy the contract, then run: codecache record"),
            _ => None,
        }
    }
}
