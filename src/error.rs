//! Error types for zipnum-cluster
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for zipnum-cluster
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Unknown compression codec '{name}'")]
    UnknownCodec { name: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Output Errors
    // ============================================================================
    #[error("Output path already exists: {path}")]
    PathCollision { path: PathBuf },

    #[error("Output error: {message}")]
    Output { message: String },

    #[error("Malformed summary line: {line:?}")]
    SummaryParse { line: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an unknown codec error
    pub fn unknown_codec(name: impl Into<String>) -> Self {
        Self::UnknownCodec { name: name.into() }
    }

    /// Create a path collision error
    pub fn collision(path: impl Into<PathBuf>) -> Self {
        Self::PathCollision { path: path.into() }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::Output {
            message: message.into(),
        }
    }

    /// Create a summary parse error
    pub fn summary_parse(line: impl Into<String>) -> Self {
        Self::SummaryParse { line: line.into() }
    }

    /// Whether this error means an attempt raced another for the same
    /// partition and lost. The host scheduler decides retry vs. abort.
    pub fn is_collision(&self) -> bool {
        matches!(self, Error::PathCollision { .. })
    }
}

/// Result type alias for zipnum-cluster
pub type Result<T> = std::result::Result<T, Error>;
