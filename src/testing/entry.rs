//! Entry point contract
//!
//! An entry point is the dispatch root of a command-line application: it
//! takes the words after the program name plus a [`Context`], writes to the
//! context's streams, and signals an exit status.

use crate::testing::Context;
use std::fmt;

/// Error type entry points may return for an unexpected crash
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Process exit status signaled by an entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitStatus(i32);

impl ExitStatus {
    pub const SUCCESS: ExitStatus = ExitStatus(0);
    pub const FAILURE: ExitStatus = ExitStatus(1);
    /// Command line could not be parsed
    pub const USAGE: ExitStatus = ExitStatus(2);

    pub const fn new(code: i32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> i32 {
        self.0
    }

    pub const fn is_success(self) -> bool {
        self.0 == 0
    }
}

impl From<i32> for ExitStatus {
    fn from(code: i32) -> Self {
        Self(code)
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit status {}", self.0)
    }
}

/// A command-line application the harness can drive
///
/// `Ok(status)` is the normal exit signal, whatever the code. `Err` (or a
/// panic) is an uncaught failure.
pub trait EntryPoint {
    fn call(&self, args: &[String], ctx: &mut Context<'_>) -> Result<ExitStatus, BoxError>;
}

impl<F> EntryPoint for F
where
    F: Fn(&[String], &mut Context<'_>) -> Result<ExitStatus, BoxError>,
{
    fn call(&self, args: &[String], ctx: &mut Context<'_>) -> Result<ExitStatus, BoxError> {
        self(args, ctx)
    }
}

/// Pin a closure to the entry point signature so its argument and return
/// types are inferred
pub fn entry_point<F>(f: F) -> F
where
    F: Fn(&[String], &mut Context<'_>) -> Result<ExitStatus, BoxError>,
{
    f
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_status_codes() {
        assert!(ExitStatus::SUCCESS.is_success());
        assert!(!ExitStatus::FAILURE.is_success());
        assert_eq!(ExitStatus::USAGE.code(), 2);
        assert_eq!(ExitStatus::from(3), ExitStatus::new(3));
        assert_eq!(ExitStatus::new(5).to_string(), "exit status 5");
    }
}
