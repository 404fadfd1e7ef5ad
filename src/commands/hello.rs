//! Hello command implementation
//!
//! Greets someone. The name comes from the command line, then the
//! environment, then the config file.

use crate::cli::args::HelloArgs;
use crate::cli::output::{print_output, Greeting};
use crate::cli::Cli;
use crate::commands::config::resolve_config;
use crate::config::NAME_ENV;
use crate::error::Result;
use crate::testing::Context;

/// Execute the hello command
pub fn run_hello(ctx: &mut Context<'_>, args: &HelloArgs, cli: &Cli) -> Result<()> {
    let name = args
        .name
        .clone()
        .or_else(|| ctx.env().var_non_empty(NAME_ENV));

    let config = resolve_config(ctx, cli)?
        .with_name(name)
        .with_shout(args.shout.then_some(true))
        .build();

    let greeting = &config.greeting;
    log::debug!("Greeting {}", greeting.name_or_default());

    let output = Greeting::new(
        &greeting.salutation,
        greeting.name_or_default(),
        &greeting.punctuation,
        greeting.shout,
    );
    print_output(ctx.stdout(), &output, cli.format)?;

    Ok(())
}
