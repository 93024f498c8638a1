use clap::{Args, Subcommand};

use crate::cli::subcommands::SnapshotCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Composite fit score and sub-scores.
    Metrics,
    /// Rule-based alerts, sorted by priority.
    Alerts(AdvisoryArgs),
    /// Metrics and alerts together.
    Report(AdvisoryArgs),
    /// Trend over completed assessment cycles.
    History,
    /// Integrity checks on the snapshot.
    Validate,
    /// Snapshot storage.
    Snapshot {
        #[command(subcommand)]
        action: SnapshotCommands,
    },
    /// Print JSON Schema for a document type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct AdvisoryArgs {
    /// Merge alerts from the configured advisory service
    #[arg(long)]
    pub advisory: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Document type: snapshot, metrics_report, alert, history_summary, fit_report
    pub type_name: String,
}
