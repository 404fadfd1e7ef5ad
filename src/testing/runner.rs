//! The invocation harness
//!
//! Runs an [`EntryPoint`] synchronously against capture buffers and an
//! explicit [`Environment`], and reports what happened as an
//! [`InvocationResult`]. Entry point failures (returned errors and panics)
//! are recorded in the result unless strict mode is requested; only
//! failures to set up the isolated context are returned as errors.

use crate::error::HarnessError;
use crate::testing::capture::CaptureWriter;
use crate::testing::panic_capture::{payload_message, PanicCapture};
use crate::testing::{Context, EntryPoint, Environment, ExitStatus, Failure, InvocationResult};
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::rc::Rc;
use tempfile::TempDir;

/// Options forwarded to the invocation context
#[derive(Debug, Clone)]
pub struct InvokeOptions {
    /// Bytes served as standard input
    pub input: Vec<u8>,
    /// Allow ANSI styling
    pub color: bool,
    /// Record failures in the result instead of propagating them
    pub catch_failures: bool,
    /// Let environment lookups fall through to the process environment
    pub inherit_env: bool,
    /// Working directory presented to the entry point
    pub cwd: Option<PathBuf>,
    /// Run inside a fresh temporary directory, removed afterwards
    pub isolated_filesystem: bool,
    /// Program name presented to the entry point
    pub prog_name: Option<String>,
}

impl Default for InvokeOptions {
    fn default() -> Self {
        Self {
            input: Vec::new(),
            color: false,
            catch_failures: true,
            inherit_env: false,
            cwd: None,
            isolated_filesystem: false,
            prog_name: None,
        }
    }
}

/// Run `entry` once with the given arguments, environment and options
pub fn run(
    entry: &dyn EntryPoint,
    args: &[String],
    env: &Environment,
    options: &InvokeOptions,
) -> Result<InvocationResult, HarnessError> {
    let env = env.clone().inheriting(env.inherits() || options.inherit_env);
    env.validate()?;

    let isolated = if options.isolated_filesystem {
        Some(
            tempfile::Builder::new()
                .prefix("easy-as-pypi-")
                .tempdir()
                .map_err(HarnessError::IsolatedFilesystem)?,
        )
    } else {
        None
    };

    let cwd = match (&isolated, &options.cwd) {
        (Some(dir), _) => dir.path().to_path_buf(),
        (None, Some(cwd)) => cwd.clone(),
        (None, None) => std::env::current_dir().map_err(HarnessError::WorkingDirectory)?,
    };

    log::debug!(
        "Invoking entry point with {} argument(s) in {}",
        args.len(),
        cwd.display()
    );

    let (shared, mut stdout, mut stderr) = CaptureWriter::pair();
    let mut stdin: &[u8] = &options.input;

    // Strict mode leaves panic reporting to the previous hook
    let panic_capture = options.catch_failures.then(PanicCapture::start);
    let outcome = {
        let mut ctx = Context::new(&env, &cwd, &mut stdin, &mut stdout, &mut stderr)
            .with_color(options.color)
            .with_prog_name(options.prog_name.as_deref());

        panic::catch_unwind(AssertUnwindSafe(|| entry.call(args, &mut ctx)))
    };
    let panic_record = panic_capture.as_ref().and_then(PanicCapture::take);
    drop(panic_capture);

    drop(stdout);
    drop(stderr);
    let capture = Rc::try_unwrap(shared)
        .map(RefCell::into_inner)
        .unwrap_or_else(|shared| shared.borrow().clone());

    let (exit_code, failure) = match outcome {
        Ok(Ok(status)) => (status.code(), None),
        Ok(Err(err)) => {
            let failure = Failure::from_error(&*err);
            if !options.catch_failures {
                return Err(HarnessError::Uncaught(failure));
            }
            (ExitStatus::FAILURE.code(), Some(failure))
        }
        Err(payload) => {
            if !options.catch_failures {
                panic::resume_unwind(payload);
            }
            let failure = Failure::from_panic(payload_message(&*payload), panic_record);
            (ExitStatus::FAILURE.code(), Some(failure))
        }
    };

    if let Some(failure) = &failure {
        log::debug!("Entry point failed: {}", failure);
    }
    log::debug!("Entry point finished with exit code {}", exit_code);

    Ok(InvocationResult {
        exit_code,
        stdout: capture.stdout,
        stderr: capture.stderr,
        output: capture.combined,
        failure,
    })
}

/// One invocation: entry point, arguments, environment and options
pub struct InvocationRequest<'e> {
    entry: &'e dyn EntryPoint,
    args: Vec<String>,
    env: Environment,
    options: InvokeOptions,
}

impl<'e> InvocationRequest<'e> {
    /// Create a request with no arguments, an empty environment and default options
    pub fn new(entry: &'e dyn EntryPoint) -> Self {
        Self {
            entry,
            args: Vec::new(),
            env: Environment::new(),
            options: InvokeOptions::default(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Set one environment override
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.set(key, value);
        self
    }

    /// Layer a whole environment over the current one
    pub fn environment(mut self, env: &Environment) -> Self {
        self.env = self.env.overlay(env);
        self
    }

    pub fn input(mut self, input: impl Into<Vec<u8>>) -> Self {
        self.options.input = input.into();
        self
    }

    pub fn color(mut self, color: bool) -> Self {
        self.options.color = color;
        self
    }

    pub fn catch_failures(mut self, catch: bool) -> Self {
        self.options.catch_failures = catch;
        self
    }

    pub fn inherit_env(mut self, inherit: bool) -> Self {
        self.options.inherit_env = inherit;
        self
    }

    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.options.cwd = Some(cwd.into());
        self
    }

    pub fn isolated_filesystem(mut self, isolated: bool) -> Self {
        self.options.isolated_filesystem = isolated;
        self
    }

    pub fn prog_name(mut self, prog_name: impl Into<String>) -> Self {
        self.options.prog_name = Some(prog_name.into());
        self
    }

    /// Replace all options at once
    pub fn options(mut self, options: InvokeOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the request
    pub fn invoke(self) -> Result<InvocationResult, HarnessError> {
        run(self.entry, &self.args, &self.env, &self.options)
    }
}

/// Reusable harness carrying default environment and options
#[derive(Debug, Clone, Default)]
pub struct CliRunner {
    env: Environment,
    options: InvokeOptions,
}

impl CliRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an environment override applied to every invocation
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.set(key, value);
        self
    }

    /// Replace the default environment
    pub fn with_environment(mut self, env: Environment) -> Self {
        self.env = env;
        self
    }

    /// Replace the default options
    pub fn with_options(mut self, options: InvokeOptions) -> Self {
        self.options = options;
        self
    }

    /// Start a request seeded with this runner's defaults
    pub fn request<'e>(&self, entry: &'e dyn EntryPoint) -> InvocationRequest<'e> {
        InvocationRequest::new(entry)
            .environment(&self.env)
            .options(self.options.clone())
    }

    /// Invoke `entry` with `args` and the runner's defaults
    pub fn invoke<I, S>(
        &self,
        entry: &dyn EntryPoint,
        args: I,
    ) -> Result<InvocationResult, HarnessError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request(entry).args(args).invoke()
    }

    /// Run a prepared request
    pub fn run(&self, request: InvocationRequest<'_>) -> Result<InvocationResult, HarnessError> {
        request.invoke()
    }

    /// Create a temporary directory callers can populate and pass as `cwd`
    ///
    /// The directory is removed when the returned handle is dropped.
    pub fn isolated_filesystem(&self) -> Result<TempDir, HarnessError> {
        tempfile::Builder::new()
            .prefix("easy-as-pypi-")
            .tempdir()
            .map_err(HarnessError::IsolatedFilesystem)
    }
}
