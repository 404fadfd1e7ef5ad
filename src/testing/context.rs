//! Per-invocation execution context
//!
//! Everything an entry point would otherwise take from the process
//! (environment, standard streams, working directory) is handed to it
//! through a [`Context`].

use crate::testing::Environment;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Explicit view of the process an entry point runs in
pub struct Context<'a> {
    env: &'a Environment,
    cwd: &'a Path,
    stdin: &'a mut dyn BufRead,
    stdout: &'a mut dyn Write,
    stderr: &'a mut dyn Write,
    color: bool,
    prog_name: Option<&'a str>,
}

impl<'a> Context<'a> {
    /// Create a context over the given environment and streams
    pub fn new(
        env: &'a Environment,
        cwd: &'a Path,
        stdin: &'a mut dyn BufRead,
        stdout: &'a mut dyn Write,
        stderr: &'a mut dyn Write,
    ) -> Self {
        Self {
            env,
            cwd,
            stdin,
            stdout,
            stderr,
            color: false,
            prog_name: None,
        }
    }

    /// Allow ANSI styling in output
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Override the program name the entry point reports
    pub fn with_prog_name(mut self, prog_name: Option<&'a str>) -> Self {
        self.prog_name = prog_name;
        self
    }

    pub fn env(&self) -> &Environment {
        self.env
    }

    /// Shorthand for `self.env().var(key)`
    pub fn var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    pub fn cwd(&self) -> &Path {
        self.cwd
    }

    /// Resolve `path` against the context working directory
    pub fn resolve_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    pub fn stdin(&mut self) -> &mut dyn BufRead {
        &mut *self.stdin
    }

    pub fn stdout(&mut self) -> &mut dyn Write {
        &mut *self.stdout
    }

    pub fn stderr(&mut self) -> &mut dyn Write {
        &mut *self.stderr
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn prog_name(&self) -> Option<&str> {
        self.prog_name
    }
}
