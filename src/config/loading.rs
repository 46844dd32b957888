use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use super::{Config, ConfigPaths};
use crate::{CtlError, Result};

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Read from this file
    File(PathBuf),
    /// No file was found; built-in defaults are in use
    Defaults,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location from
    /// [`ConfigPaths::main_config`] is used if present, and built-in
    /// defaults otherwise. The file is never created.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit configuration file cannot be read
    /// - The TOML content is invalid
    /// - A bus name, path or interface is not a valid D-Bus name
    pub fn load(path: Option<&Path>) -> Result<Config> {
        Self::load_with_source(path).map(|(config, _)| config)
    }

    /// Same as [`Config::load`], also reporting which file was used.
    ///
    /// Nothing is logged here since logging is usually configured from the
    /// result; callers log the returned [`ConfigSource`] once it is set up.
    ///
    /// # Errors
    /// See [`Config::load`].
    pub fn load_with_source(path: Option<&Path>) -> Result<(Config, ConfigSource)> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match ConfigPaths::main_config() {
                Ok(default_path) if default_path.exists() => default_path,
                _ => return Ok((Config::default(), ConfigSource::Defaults)),
            },
        };

        let config = Self::load_from_path(&path)?;
        Ok((config, ConfigSource::File(path)))
    }

    /// Reads and validates a configuration file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| {
            CtlError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| CtlError::toml_parse(e, Some(path)))?;
        config.validate()?;

        Ok(config)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    /// Returns an error if the TOML is invalid or fails validation.
    pub fn from_toml(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(|e| CtlError::toml_parse(e, None))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates every section of the configuration.
    ///
    /// # Errors
    /// Returns `CtlError::Config` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.bus.validate()
    }
}
