//! Isolated CLI invocation harness
//!
//! Drives an [`EntryPoint`] with controlled arguments, environment and
//! standard input, and captures its output, exit status and any uncaught
//! failure into an [`InvocationResult`] for tests to assert on.
//!
//! ```no_run
//! use easy_as_pypi::app::App;
//! use easy_as_pypi::testing::CliRunner;
//!
//! let result = CliRunner::new().invoke(&App, ["hello", "Ferris"]).unwrap();
//! assert_eq!(result.exit_code(), 0);
//! assert!(result.output().contains("Ferris"));
//! ```

mod capture;
pub mod context;
pub mod entry;
pub mod environment;
mod panic_capture;
pub mod result;
pub mod runner;

pub use context::Context;
pub use entry::{entry_point, BoxError, EntryPoint, ExitStatus};
pub use environment::Environment;
pub use result::{Failure, FailureKind, InvocationResult};
pub use runner::{run, CliRunner, InvocationRequest, InvokeOptions};
