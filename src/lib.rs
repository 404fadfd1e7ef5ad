//! easy-as-pypi - boilerplate CLI application library
//!
//! This library provides a small command-line application together with an
//! isolated invocation harness for testing it (or any other entry point).
//!
//! # Modules
//!
//! - [`app`]: Application entry point
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`error`]: Error types
//! - [`testing`]: Isolated invocation harness

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod testing;

pub use app::App;
pub use error::{AppError, HarnessError, Result};
