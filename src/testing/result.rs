//! Invocation outcomes

use crate::testing::panic_capture::PanicRecord;
use std::fmt;

/// How the entry point failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Entry point returned `Err`
    Error,
    /// Entry point panicked
    Panic,
}

/// An uncaught failure recorded by the harness
#[derive(Debug, Clone)]
pub struct Failure {
    kind: FailureKind,
    message: String,
    sources: Vec<String>,
    location: Option<String>,
    backtrace: Option<String>,
}

impl Failure {
    pub(crate) fn from_error(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut sources = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            sources.push(cause.to_string());
            source = cause.source();
        }

        Self {
            kind: FailureKind::Error,
            message: err.to_string(),
            sources,
            location: None,
            backtrace: None,
        }
    }

    pub(crate) fn from_panic(message: String, record: Option<PanicRecord>) -> Self {
        match record {
            Some(record) => Self {
                kind: FailureKind::Panic,
                message: record.message,
                sources: Vec::new(),
                location: record.location,
                backtrace: record.backtrace,
            },
            None => Self {
                kind: FailureKind::Panic,
                message,
                sources: Vec::new(),
                location: None,
                backtrace: None,
            },
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn is_panic(&self) -> bool {
        self.kind == FailureKind::Panic
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Messages of the error's `source()` chain, outermost first
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    /// `file:line:column` of a panic
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Backtrace text, when `RUST_BACKTRACE` enabled capture
    pub fn backtrace(&self) -> Option<&str> {
        self.backtrace.as_deref()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::Error => write!(f, "{}", self.message)?,
            FailureKind::Panic => write!(f, "panicked: {}", self.message)?,
        }
        if let Some(location) = &self.location {
            write!(f, " at {}", location)?;
        }
        for source in &self.sources {
            write!(f, "\n  caused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for Failure {}

/// Everything observed during one invocation
#[derive(Debug, Clone)]
pub struct InvocationResult {
    pub(crate) exit_code: i32,
    pub(crate) stdout: Vec<u8>,
    pub(crate) stderr: Vec<u8>,
    pub(crate) output: Vec<u8>,
    pub(crate) failure: Option<Failure>,
}

impl InvocationResult {
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Exit code 0 and no uncaught failure
    pub fn success(&self) -> bool {
        self.exit_code == 0 && self.failure.is_none()
    }

    /// Standard output and standard error, interleaved in write order
    pub fn output(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }

    pub fn output_bytes(&self) -> &[u8] {
        &self.output
    }

    pub fn stdout_bytes(&self) -> &[u8] {
        &self.stdout
    }

    pub fn stderr_bytes(&self) -> &[u8] {
        &self.stderr
    }

    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }
}
