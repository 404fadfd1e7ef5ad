//! Config command implementation
//!
//! Shows the resolved configuration and where it is looked up.

use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::cli::output::{print_output, ConfigPathEntry, ConfigPaths, ConfigView};
use crate::cli::Cli;
use crate::config::{ConfigBuilder, ConfigFile, CONFIG_ENV};
use crate::error::Result;
use crate::testing::Context;
use std::path::PathBuf;

/// Explicit config path: `--config`, else the config environment variable
fn explicit_path(ctx: &Context<'_>, cli: &Cli) -> Option<PathBuf> {
    cli.config
        .clone()
        .or_else(|| ctx.env().var_non_empty(CONFIG_ENV).map(PathBuf::from))
}

/// Resolve configuration for a command, noting its source when verbose
pub(crate) fn resolve_config(ctx: &mut Context<'_>, cli: &Cli) -> Result<ConfigBuilder> {
    let explicit = explicit_path(ctx, cli);
    let builder = ConfigBuilder::new()
        .with_file(explicit.as_deref(), ctx.env(), ctx.cwd())?
        .with_verbose(cli.verbose.then_some(true));

    if builder.config().general.verbose {
        match builder.source() {
            Some(source) => writeln!(ctx.stderr(), "Using config {}", source.display())?,
            None => writeln!(ctx.stderr(), "Using default configuration")?,
        }
    }

    Ok(builder)
}

/// Execute config commands
pub fn run_config(ctx: &mut Context<'_>, args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.command {
        ConfigCommands::Show => run_config_show(ctx, cli),
        ConfigCommands::Path => run_config_path(ctx, cli),
    }
}

fn run_config_show(ctx: &mut Context<'_>, cli: &Cli) -> Result<()> {
    let builder = resolve_config(ctx, cli)?;
    let source = builder.source().map(|p| p.to_path_buf());
    let view = ConfigView::new(builder.build(), source.as_deref())?;

    print_output(ctx.stdout(), &view, cli.format)?;
    Ok(())
}

fn run_config_path(ctx: &mut Context<'_>, cli: &Cli) -> Result<()> {
    let mut candidates = Vec::new();
    if let Some(path) = explicit_path(ctx, cli) {
        candidates.push(ctx.resolve_path(path));
    }
    candidates.extend(ConfigFile::default_paths(ctx.env(), ctx.cwd()));

    let paths = ConfigPaths {
        paths: candidates
            .into_iter()
            .map(|path| ConfigPathEntry {
                exists: path.is_file(),
                path: path.display().to_string(),
            })
            .collect(),
    };

    print_output(ctx.stdout(), &paths, cli.format)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Environment;
    use clap::Parser;

    fn run(env: &Environment, cwd: &std::path::Path, argv: &[&str]) -> (Result<()>, String) {
        let cli = Cli::try_parse_from(argv).unwrap();
        let mut stdin: &[u8] = b"";
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = {
            let mut ctx = Context::new(env, cwd, &mut stdin, &mut out, &mut err);
            match &cli.command {
                Some(crate::cli::Commands::Config(args)) => run_config(&mut ctx, args, &cli),
                other => panic!("Expected Config command, got {:?}", other),
            }
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_show_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (result, out) = run(&Environment::new(), dir.path(), &["app", "config", "show"]);
        result.unwrap();
        assert!(out.contains("<defaults>"));
        assert!(out.contains("salutation = \"Hello\""));
    }

    #[test]
    fn test_show_from_env_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("env.toml"), "[greeting]\nsalutation = \"Hi\"\n").unwrap();
        let env = Environment::new().with(CONFIG_ENV, "env.toml");

        let (result, out) = run(&env, dir.path(), &["app", "--format", "json", "config", "show"]);
        result.unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["config"]["greeting"]["salutation"], "Hi");
        assert!(value["source"].as_str().unwrap().ends_with("env.toml"));
    }

    #[test]
    fn test_path_marks_existing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("easy-as-pypi.toml"), "").unwrap();

        let (result, out) = run(&Environment::new(), dir.path(), &["app", "config", "path"]);
        result.unwrap();
        assert!(out.contains("[✓]"));
        assert!(out.contains(".easy-as-pypi.toml"));
    }
}
