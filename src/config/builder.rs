//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;
use crate::testing::Environment;
use std::path::{Path, PathBuf};

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
    source: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            source: None,
        }
    }

    /// Load configuration from an explicit file, or else from default locations
    ///
    /// An explicit file that cannot be loaded is an error; missing default
    /// files are not.
    pub fn with_file(
        mut self,
        path: Option<&Path>,
        env: &Environment,
        cwd: &Path,
    ) -> Result<Self, ConfigError> {
        let loaded = match path {
            Some(path) => {
                let path = if path.is_absolute() {
                    path.to_path_buf()
                } else {
                    cwd.join(path)
                };
                let config = ConfigFile::load(&path)?;
                log::info!("Loaded config from {}", path.display());
                Some((config, path))
            }
            None => ConfigFile::load_default(env, cwd)?,
        };

        if let Some((config, source)) = loaded {
            self.config = config;
            self.source = Some(source);
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override the name to greet
    pub fn with_name(mut self, name: Option<String>) -> Self {
        if let Some(n) = name {
            self.config.greeting.name = Some(n);
        }
        self
    }

    /// Override with CLI shout flag
    pub fn with_shout(mut self, shout: Option<bool>) -> Self {
        if let Some(s) = shout {
            self.config.greeting.shout = s;
        }
        self
    }

    /// Configuration merged so far
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// File the configuration was loaded from, if any
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert!(!config.general.verbose);
        assert!(!config.greeting.shout);
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_verbose(Some(true))
            .with_name(Some("Ferris".to_string()))
            .with_shout(Some(true))
            .build();

        assert!(config.general.verbose);
        assert!(config.greeting.shout);
        assert_eq!(config.greeting.name.as_deref(), Some("Ferris"));
    }

    #[test]
    fn test_none_keeps_file_value() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("custom.toml"), "[greeting]\nshout = true\n").unwrap();

        let builder = ConfigBuilder::new()
            .with_file(Some(Path::new("custom.toml")), &Environment::new(), dir.path())
            .unwrap()
            .with_shout(None);

        assert!(builder.source().unwrap().ends_with("custom.toml"));
        assert!(builder.build().greeting.shout);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigBuilder::new().with_file(
            Some(Path::new("missing.toml")),
            &Environment::new(),
            dir.path(),
        );
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
