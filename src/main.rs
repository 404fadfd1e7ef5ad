//! easy-as-pypi - boilerplate CLI application
//!
//! Builds an invocation context from the real process and hands it to the
//! application entry point.

use easy_as_pypi::cli::args::default_log_filter;
use easy_as_pypi::testing::{Context, EntryPoint, Environment, ExitStatus};
use easy_as_pypi::App;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

fn main() {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    // Initialize logging, RUST_LOG still wins over --verbose
    let filter = default_log_filter(&args);
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .init();

    let env = Environment::from_process();
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let color = io::stdout().is_terminal() && env.var("NO_COLOR").is_none();

    let mut stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    // Run the application
    let result = {
        let mut ctx =
            Context::new(&env, &cwd, &mut stdin, &mut stdout, &mut stderr).with_color(color);
        App.call(&args, &mut ctx)
    };
    let _ = stdout.flush();

    let status = match result {
        Ok(status) => status,
        Err(e) => {
            log::error!("{}", e);
            let _ = writeln!(stderr, "Error: {}", e);
            ExitStatus::FAILURE
        }
    };

    std::process::exit(status.code());
}
