//! Error Types
//!
//! Errors produced while loading, validating, or reading formatting options.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the configuration core
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An option value violates its invariant
    #[error("invalid value for `{option}`: {reason}")]
    Validation { option: String, reason: String },

    /// Options were requested before a successful load
    #[error("formatting options requested before load")]
    Uninitialized,

    /// The config file could not be read
    #[error("failed to read config file {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file does not deserialize into the options record
    #[error("failed to parse config file {}: {}", .path.display(), .reason)]
    Parse { path: PathBuf, reason: String },

    /// The config file extension maps to no known parser
    #[error("unsupported config file format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

impl ConfigError {
    pub(crate) fn validation(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            option: option.into(),
            reason: reason.into(),
        }
    }
}
