//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::io::Write;
use std::path::PathBuf;

/// Program name used when the caller does not supply one
pub const PROG_NAME: &str = "easy-as-pypi";

/// Boilerplate CLI application
///
/// Greets people, echoes input and reports its own configuration.
#[derive(Parser, Debug)]
#[command(name = "easy-as-pypi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file [env: EASY_AS_PYPI_CONFIG]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a greeting
    Hello(HelloArgs),

    /// Copy standard input to standard output
    Echo(EchoArgs),

    /// Inspect configuration
    Config(ConfigArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the hello command
#[derive(Parser, Debug)]
pub struct HelloArgs {
    /// Who to greet [env: EASY_AS_PYPI_NAME]
    pub name: Option<String>,

    /// Greet in upper case
    #[arg(long)]
    pub shout: bool,
}

/// Arguments for the echo command
#[derive(Parser, Debug)]
pub struct EchoArgs {
    /// Upper-case the input before echoing it
    #[arg(long)]
    pub upper: bool,
}

/// Arguments for config commands
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the resolved configuration
    Show,

    /// List configuration file locations
    Path,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions into `out`
pub fn generate_completions(shell: Shell, prog_name: &str, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, prog_name, out);
}

/// Default log filter for the process logger
///
/// `--verbose` has to be seen before the logger is built, since raising the
/// global level later would not get past the filter it was initialized with.
/// Arguments that fail to parse fall back to the quiet filter; the parse
/// error itself is reported by the application.
pub fn default_log_filter(args: &[String]) -> &'static str {
    let argv = std::iter::once(PROG_NAME.to_string()).chain(args.iter().cloned());
    match Cli::try_parse_from(argv) {
        Ok(cli) if cli.verbose => "debug",
        _ => "warn",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let args = Cli::try_parse_from([PROG_NAME]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.format, OutputFormat::Table);
    }

    #[test]
    fn test_cli_parse_verbose() {
        let args = Cli::try_parse_from([PROG_NAME, "-v", "version"]).unwrap();
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_parse_hello() {
        let args = Cli::try_parse_from([PROG_NAME, "hello", "Ferris", "--shout"]).unwrap();
        if let Some(Commands::Hello(hello)) = args.command {
            assert_eq!(hello.name.as_deref(), Some("Ferris"));
            assert!(hello.shout);
        } else {
            panic!("Expected Hello command");
        }
    }

    #[test]
    fn test_cli_parse_global_after_subcommand() {
        let args =
            Cli::try_parse_from([PROG_NAME, "config", "show", "--format", "json"]).unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert!(matches!(
            args.command,
            Some(Commands::Config(ConfigArgs {
                command: ConfigCommands::Show
            }))
        ));
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        let result = Cli::try_parse_from([PROG_NAME, "--bogus-flag"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }

    fn owned(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_default_log_filter_follows_verbose() {
        assert_eq!(default_log_filter(&owned(&[])), "warn");
        assert_eq!(default_log_filter(&owned(&["hello"])), "warn");
        assert_eq!(default_log_filter(&owned(&["-v", "hello"])), "debug");
        assert_eq!(default_log_filter(&owned(&["hello", "--verbose"])), "debug");
    }

    #[test]
    fn test_default_log_filter_ignores_bad_args() {
        assert_eq!(default_log_filter(&owned(&["-v", "--bogus-flag"])), "warn");
    }
}
