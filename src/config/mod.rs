//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use serde::{Deserialize, Serialize};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "EASY_AS_PYPI_CONFIG";

/// Environment variable naming who to greet
pub const NAME_ENV: &str = "EASY_AS_PYPI_NAME";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Greeting settings
    pub greeting: GreetingConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose output
    pub verbose: bool,
}

/// Greeting configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GreetingConfig {
    /// Who to greet when no name is given
    pub name: Option<String>,
    /// Word opening the greeting
    pub salutation: String,
    /// Text closing the greeting
    pub punctuation: String,
    /// Upper-case the greeting
    pub shout: bool,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            name: None,
            salutation: "Hello".to_string(),
            punctuation: "!".to_string(),
            shout: false,
        }
    }
}

impl GreetingConfig {
    /// Name to greet when nothing more specific was given
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or("World")
    }
}
