//! Version command implementation

use crate::cli::args::OutputFormat;
use crate::cli::output::{print_output, VersionInfo};
use crate::error::Result;
use crate::testing::Context;

/// Execute the version command
pub fn run_version(ctx: &mut Context<'_>, format: OutputFormat) -> Result<()> {
    let info = VersionInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    print_output(ctx.stdout(), &info, format)?;
    Ok(())
}
