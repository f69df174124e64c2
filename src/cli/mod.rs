//! CLI module for aerometa
//!
//! Provides command-line interface for:
//! - validate: Build the lookup and validate every alias
//! - resolve: Resolve a name to its index abstraction
//! - aliases: Show per-member alias declarations

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{
    aliases, describe_abstraction, describe_member_aliases, load_lookup, resolve, run, run_command,
    summarize_lookup, validate,
};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
