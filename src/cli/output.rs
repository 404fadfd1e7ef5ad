//! Output formatting utilities
//!
//! Provides table and JSON output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::ConfigError;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// Format and write output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(
    out: &mut dyn Write,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).unwrap_or_else(|_| "{}".to_string());
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(out, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as a compact single line
    fn to_compact(&self) -> String {
        self.to_table().replace('\n', " | ")
    }
}

/// Greeting display
#[derive(Debug, Clone, Serialize)]
pub struct Greeting {
    pub salutation: String,
    pub name: String,
    pub punctuation: String,
    pub message: String,
}

impl Greeting {
    pub fn new(salutation: &str, name: &str, punctuation: &str, shout: bool) -> Self {
        let mut message = format!("{}, {}{}", salutation, name, punctuation);
        if shout {
            message = message.to_uppercase();
        }

        Self {
            salutation: salutation.to_string(),
            name: name.to_string(),
            punctuation: punctuation.to_string(),
            message,
        }
    }
}

impl TableDisplay for Greeting {
    fn to_table(&self) -> String {
        self.message.clone()
    }
}

/// Version display
#[derive(Debug, Clone, Serialize)]
pub struct VersionInfo {
    pub name: String,
    pub version: String,
}

impl TableDisplay for VersionInfo {
    fn to_table(&self) -> String {
        format!("{} {}", self.name, self.version)
    }

    fn to_compact(&self) -> String {
        self.version.clone()
    }
}

/// Resolved configuration display
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub source: Option<String>,
    pub config: Config,
    #[serde(skip)]
    rendered: String,
}

impl ConfigView {
    pub fn new(config: Config, source: Option<&Path>) -> Result<Self, ConfigError> {
        let rendered = toml::to_string_pretty(&config)?;
        Ok(Self {
            source: source.map(|p| p.display().to_string()),
            config,
            rendered,
        })
    }
}

impl TableDisplay for ConfigView {
    fn to_table(&self) -> String {
        let source = self.source.as_deref().unwrap_or("<defaults>");
        format!("# Source: {}\n{}", source, self.rendered.trim_end())
    }

    fn to_compact(&self) -> String {
        self.source
            .clone()
            .unwrap_or_else(|| "<defaults>".to_string())
    }
}

/// One candidate configuration location
#[derive(Debug, Clone, Serialize)]
pub struct ConfigPathEntry {
    pub path: String,
    pub exists: bool,
}

/// Candidate configuration locations, in lookup order
#[derive(Debug, Clone, Serialize)]
pub struct ConfigPaths {
    pub paths: Vec<ConfigPathEntry>,
}

impl TableDisplay for ConfigPaths {
    fn to_table(&self) -> String {
        let mut output = String::new();
        for entry in &self.paths {
            let marker = if entry.exists { "✓" } else { " " };
            output.push_str(&format!("[{}] {}\n", marker, entry.path));
        }
        output.trim_end().to_string()
    }

    fn to_compact(&self) -> String {
        self.paths
            .iter()
            .filter(|e| e.exists)
            .map(|e| e.path.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_table() {
        let greeting = Greeting::new("Hello", "World", "!", false);
        assert_eq!(greeting.to_table(), "Hello, World!");
    }

    #[test]
    fn test_greeting_shout() {
        let greeting = Greeting::new("Hello", "Ferris", "!", true);
        assert_eq!(greeting.to_table(), "HELLO, FERRIS!");
        assert_eq!(greeting.name, "Ferris");
    }

    #[test]
    fn test_print_output_json() {
        let info = VersionInfo {
            name: "easy-as-pypi".to_string(),
            version: "1.2.3".to_string(),
        };

        let mut out = Vec::new();
        print_output(&mut out, &info, OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["version"], "1.2.3");
    }

    #[test]
    fn test_config_view_table() {
        let view = ConfigView::new(Config::default(), None).unwrap();
        let table = view.to_table();
        assert!(table.starts_with("# Source: <defaults>"));
        assert!(table.contains("[greeting]"));
    }

    #[test]
    fn test_config_paths_compact_lists_found() {
        let paths = ConfigPaths {
            paths: vec![
                ConfigPathEntry {
                    path: "/a.toml".to_string(),
                    exists: false,
                },
                ConfigPathEntry {
                    path: "/b.toml".to_string(),
                    exists: true,
                },
            ],
        };
        assert_eq!(paths.to_compact(), "/b.toml");
        assert!(paths.to_table().contains("[✓] /b.toml"));
    }
}
