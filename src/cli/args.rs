//! CLI argument definitions using clap
//!
//! Commands:
//! - aerometa validate --config <path>
//! - aerometa resolve --config <path> --name <name>
//! - aerometa aliases --config <path> --name <alias>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// aerometa - index and alias abstractions over AeroDB cluster metadata
#[derive(Parser, Debug)]
#[command(name = "aerometa")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the indices lookup and validate every alias
    Validate {
        /// Path to configuration file
        #[arg(long, default_value = "./aerometa.json")]
        config: PathBuf,
    },

    /// Resolve an index or alias name to its abstraction
    Resolve {
        /// Path to configuration file
        #[arg(long, default_value = "./aerometa.json")]
        config: PathBuf,

        /// Index or alias name
        #[arg(long)]
        name: String,
    },

    /// Show each member's declaration of an alias
    Aliases {
        /// Path to configuration file
        #[arg(long, default_value = "./aerometa.json")]
        config: PathBuf,

        /// Alias name
        #[arg(long)]
        name: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
