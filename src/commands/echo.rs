//! Echo command implementation

use crate::cli::args::EchoArgs;
use crate::error::Result;
use crate::testing::Context;

/// Execute the echo command
pub fn run_echo(ctx: &mut Context<'_>, args: &EchoArgs) -> Result<()> {
    let mut input = Vec::new();
    ctx.stdin().read_to_end(&mut input)?;
    log::debug!("Echoing {} byte(s)", input.len());

    if args.upper {
        input = String::from_utf8_lossy(&input).to_uppercase().into_bytes();
    }

    ctx.stdout().write_all(&input)?;
    ctx.stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Environment;
    use std::path::Path;

    fn echo(input: &[u8], upper: bool) -> Vec<u8> {
        let env = Environment::new();
        let mut stdin = input;
        let mut out = Vec::new();
        let mut err = Vec::new();
        {
            let mut ctx = Context::new(&env, Path::new("."), &mut stdin, &mut out, &mut err);
            run_echo(&mut ctx, &EchoArgs { upper }).unwrap();
        }
        out
    }

    #[test]
    fn test_echo_is_verbatim() {
        assert_eq!(echo(b"line one\nno newline", false), b"line one\nno newline");
    }

    #[test]
    fn test_echo_upper() {
        assert_eq!(echo(b"quiet\n", true), b"QUIET\n");
    }

    #[test]
    fn test_echo_empty_input() {
        assert!(echo(b"", false).is_empty());
    }
}
