//! Configuration file management.
//!
//! Handles reading and writing the user's `config.toml`, which holds the
//! CircleCI API token and default organization.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// User configuration stored in `~/.config/ccienv/config.toml`
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// CircleCI personal API token
    pub api_token: String,
    /// Organization used to build project slugs
    pub organization_name: String,
    /// API root override (CircleCI server installs)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl Config {
    /// Create a configuration with the default API root
    pub fn new(api_token: impl Into<String>, organization_name: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            organization_name: organization_name.into(),
            api_url: None,
        }
    }

    /// Path to the configuration file
    ///
    /// `$CCIENV_CONFIG` wins over the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` if neither is available.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(constants::CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        dirs::config_dir()
            .map(|dir| dir.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
            .ok_or_else(|| ConfigError::NoConfigDir.into())
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from an explicit path
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized(path.to_path_buf()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to an explicit path
    ///
    /// Creates the parent directory. The file is readable only by the owner
    /// on Unix since it holds the API token.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");
        self.validate()?;

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        #[cfg(unix)]
        {
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut file = std::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .mode(0o600)
                .open(path)?;
            file.write_all(contents.as_bytes())?;
            file.flush()?;

            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        {
            std::fs::write(path, contents)?;
        }

        Ok(())
    }

    /// Check that required fields are filled in
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` on a blank token or organization.
    pub fn validate(&self) -> Result<()> {
        if self.api_token.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "api_token" }.into());
        }
        if self.organization_name.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "organization_name",
            }
            .into());
        }
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"[redacted]")
            .field("organization_name", &self.organization_name)
            .field("api_url", &self.api_url)
            .finish()
    }
}
