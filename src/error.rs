//! Error types.
//!
//! Each concern gets its own enum; everything folds into [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: no config at {}", .0.display())]
    NotInitialized(PathBuf),

    #[error("cannot determine a config directory for this platform")]
    NoConfigDir,

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("config is missing required field: {field}")]
    MissingField { field: &'static str },
}

/// Malformed input for a bulk import.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("unsupported format: {0} (expected json or dotenv)")]
    UnsupportedFormat(String),

    #[error("invalid json input: {0}")]
    Json(#[source] serde_json::Error),

    #[error("invalid dotenv input: {0}")]
    Dotenv(#[source] dotenvy::Error),

    #[error("invalid dotenv input at line {line}: {content}")]
    DotenvLine { line: usize, content: String },
}

/// Failures talking to the CI provider.
///
/// `operation` names the API call so the underlying failure stays readable
/// when several calls happen in one command.
#[derive(Error, Debug)]
pub enum RemoteError {
    #[error("{operation}: request failed: {source}")]
    Request {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation}: {status}: {message}")]
    Status {
        operation: &'static str,
        status: u16,
        message: String,
    },

    #[error("{operation}: unexpected response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl RemoteError {
    /// HTTP status of the failed call, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Rejected before any network call.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("variable name cannot be empty")]
    EmptyName,

    #[error("invalid variable name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("{0}: no value provided")]
    EmptyValue(String),

    #[error("no variables specified")]
    NoNames,

    #[error("invalid project slug part '{part}': {reason}")]
    InvalidSlug { part: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
