use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `fitc` binary.
#[derive(Debug, Parser)]
#[command(name = "fitc", version, about = "Fitcheck - strategic fit scores and alerts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to general.default_format)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// User whose stored snapshot to use (defaults to store.default_user)
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Read the snapshot from this JSON file instead of the store
    #[arg(short, long, global = true)]
    pub snapshot: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self, default_format: OutputFormat) -> GlobalFlags {
        GlobalFlags {
            format: self.format.unwrap_or(default_format),
            quiet: self.quiet,
            verbose: self.verbose,
            user: self.user.clone(),
            snapshot: self.snapshot.clone(),
        }
    }
}
