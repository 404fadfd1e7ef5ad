//! Configuration file loading
//!
//! Handles loading configuration from TOML files. Default locations are
//! derived from an [`Environment`] and a working directory rather than the
//! process, so an invocation only sees the files its context points at.

use crate::config::Config;
use crate::error::ConfigError;
use crate::testing::Environment;

use std::path::{Path, PathBuf};

/// Configuration file handler
pub struct ConfigFile;

impl ConfigFile {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path.display().to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.message().to_string(),
        })
    }

    /// Load configuration from the first existing default location
    ///
    /// A file that exists but fails to load is an error; later locations
    /// are not consulted.
    pub fn load_default(
        env: &Environment,
        cwd: &Path,
    ) -> Result<Option<(Config, PathBuf)>, ConfigError> {
        let Some(path) = Self::default_paths(env, cwd).into_iter().find(|p| p.exists()) else {
            return Ok(None);
        };

        let config = Self::load(&path)?;
        log::info!("Loaded config from {}", path.display());
        Ok(Some((config, path)))
    }

    /// Get default configuration file paths, in lookup order
    pub fn default_paths(env: &Environment, cwd: &Path) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // User config
        if let Some(config_home) = env.var_non_empty("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(config_home).join("easy-as-pypi/config.toml"));
        } else if let Some(home) = env.var_non_empty("HOME") {
            paths.push(PathBuf::from(home).join(".config/easy-as-pypi/config.toml"));
        }

        // Current directory
        paths.push(cwd.join("easy-as-pypi.toml"));
        paths.push(cwd.join(".easy-as-pypi.toml"));

        paths
    }
}
