//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command. The
//! handlers are re-exported here so callers can write
//! `commands::run_hello` instead of `commands::hello::run_hello`.

pub mod config;
pub mod echo;
pub mod hello;
pub mod version;

pub use config::run_config;
pub use echo::run_echo;
pub use hello::run_hello;
pub use version::run_version;
