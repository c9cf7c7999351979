//! Core error types for studymate-core.
//!
//! Store and configuration errors are defined with thiserror. Validation
//! failures on note save and goal add are deliberately NOT errors: the
//! operation is a silent no-op and the caller observes an unchanged
//! collection.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studymate-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Store access errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by the shared store's access-scoping cell.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The store was accessed before `StoreCell::init` ran.
    #[error("Store accessed before initialization")]
    NotInitialized,

    /// `StoreCell::init` was called a second time.
    #[error("Store already initialized")]
    AlreadyInitialized,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),

    /// Unknown dot-path key passed to get/set
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Value could not be coerced to the key's type
    #[error("Invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
