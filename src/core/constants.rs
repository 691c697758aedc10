//! Constants used throughout ccienv.
//!
//! Centralizes magic strings and configuration values.

/// Directory under the platform config dir (~/.config/ccienv).
pub const CONFIG_DIR: &str = "ccienv";

/// Configuration file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "CCIENV_CONFIG";

/// Overrides the API base URL.
pub const API_URL_ENV: &str = "CCIENV_API_URL";

/// Log filter for the tracing subscriber.
pub const LOG_ENV: &str = "CCIENV_LOG";

/// CircleCI API v2 base URL.
pub const DEFAULT_API_URL: &str = "https://circleci.com/api/v2";

/// Header carrying the personal API token.
pub const TOKEN_HEADER: &str = "Circle-Token";

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// VCS prefix used when none is given (GitHub).
pub const DEFAULT_VCS: &str = "gh";
