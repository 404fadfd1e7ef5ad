//! Application entry point
//!
//! [`App`] is the dispatch root of the `easy-as-pypi` command line. It
//! reads everything it needs from the [`Context`] it is given, so the same
//! code path serves the real binary and the invocation harness.

use crate::cli::args::{generate_completions, PROG_NAME};
use crate::cli::{Cli, Commands};
use crate::commands::{run_config, run_echo, run_hello, run_version};
use crate::error::AppError;
use crate::testing::{BoxError, Context, EntryPoint, ExitStatus};
use clap::{CommandFactory, Parser};
use std::io;

/// The `easy-as-pypi` application
#[derive(Debug, Clone, Copy, Default)]
pub struct App;

impl EntryPoint for App {
    fn call(&self, args: &[String], ctx: &mut Context<'_>) -> Result<ExitStatus, BoxError> {
        let prog_name = ctx.prog_name().unwrap_or(PROG_NAME).to_string();
        let argv = std::iter::once(prog_name.clone()).chain(args.iter().cloned());

        let cli = match Cli::try_parse_from(argv) {
            Ok(cli) => cli,
            Err(err) => return Ok(render_clap_error(ctx, &err)?),
        };
        log::debug!("Parsed command line: {:?}", cli);

        match dispatch(ctx, &cli, &prog_name) {
            Ok(()) => Ok(ExitStatus::SUCCESS),
            Err(err) => {
                log::error!("{}", err);
                print_error(ctx, &err)?;
                Ok(ExitStatus::FAILURE)
            }
        }
    }
}

fn dispatch(ctx: &mut Context<'_>, cli: &Cli, prog_name: &str) -> Result<(), AppError> {
    match &cli.command {
        None => {
            let help = Cli::command().bin_name(prog_name).render_help();
            if ctx.color() {
                write!(ctx.stdout(), "{}", help.ansi())?;
            } else {
                write!(ctx.stdout(), "{}", help)?;
            }
            Ok(())
        }

        Some(Commands::Hello(args)) => run_hello(ctx, args, cli),

        Some(Commands::Echo(args)) => run_echo(ctx, args),

        Some(Commands::Config(args)) => run_config(ctx, args, cli),

        Some(Commands::Version) => run_version(ctx, cli.format),

        Some(Commands::Completions { shell }) => {
            generate_completions(*shell, prog_name, ctx.stdout());
            Ok(())
        }
    }
}

/// Report a parse failure the way clap would, returning its exit status
fn render_clap_error(ctx: &mut Context<'_>, err: &clap::Error) -> io::Result<ExitStatus> {
    let rendered = err.render();
    let text = if ctx.color() {
        rendered.ansi().to_string()
    } else {
        rendered.to_string()
    };

    if err.use_stderr() {
        write!(ctx.stderr(), "{}", text)?;
    } else {
        write!(ctx.stdout(), "{}", text)?;
    }

    Ok(ExitStatus::new(err.exit_code()))
}

fn print_error(ctx: &mut Context<'_>, err: &AppError) -> io::Result<()> {
    let out = ctx.stderr();
    writeln!(out, "Error: {}", err)?;

    // Print helpful hints for common errors
    if let AppError::Config(_) = err {
        writeln!(out)?;
        writeln!(
            out,
            "Hint: Check the file given with --config or {}.",
            crate::config::CONFIG_ENV
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{CliRunner, InvocationRequest};

    #[test]
    fn test_no_arguments_prints_usage() {
        let result = CliRunner::new().invoke(&App, Vec::<String>::new()).unwrap();
        assert_eq!(result.exit_code(), 0);
        assert!(result.output().contains("Usage: easy-as-pypi [OPTIONS] [COMMAND]"));
    }

    #[test]
    fn test_unknown_flag_is_usage_error() {
        let result = CliRunner::new().invoke(&App, ["--bogus-flag"]).unwrap();
        assert_eq!(result.exit_code(), 2);
        assert!(result.failure().is_none());
        assert!(result.stderr().contains("--bogus-flag"));
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let result = CliRunner::new().invoke(&App, ["--help"]).unwrap();
        assert_eq!(result.exit_code(), 0);
        assert!(result.stdout().contains("Usage:"));
        assert!(result.stderr().is_empty());
    }

    #[test]
    fn test_prog_name_is_used_in_usage() {
        let result = InvocationRequest::new(&App)
            .prog_name("eapp")
            .invoke()
            .unwrap();
        assert!(result.stdout().contains("Usage: eapp"));
    }

    #[test]
    fn test_color_off_has_no_escapes() {
        let result = CliRunner::new().invoke(&App, ["--bogus-flag"]).unwrap();
        assert!(!result.output().contains('\u{1b}'));
    }

    #[test]
    fn test_missing_config_reports_error() {
        let result = InvocationRequest::new(&App)
            .args(["--config", "/nonexistent/easy.toml", "hello"])
            .invoke()
            .unwrap();
        assert_eq!(result.exit_code(), 1);
        assert!(result.failure().is_none());
        assert!(result.stderr().starts_with("Error: Configuration error"));
        assert!(result.stderr().contains("Hint:"));
    }
}
