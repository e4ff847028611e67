//! ReviewLens CLI library.
//!
//! Configuration management, provider wiring, command execution and
//! output formatting for the `reviewlens` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod provider;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
