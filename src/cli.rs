//! Command-line interface definitions.

use clap::{Parser, Subcommand};

/// DNS privacy status monitor.
#[derive(Parser, Debug)]
#[command(
    name = "dnsvigil",
    version,
    about = "Watch and verify the system's encrypted-DNS status"
)]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate the DNS status once and print it.
    Status,
    /// Monitor the DNS status and print every transition until interrupted.
    Watch,
    /// Configuration inspection helpers.
    Config {
        /// Configuration subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Configuration helpers.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the JSON schema of the configuration file.
    Schema,
    /// Print the path of the configuration file.
    Path,
}
