use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum SnapshotCommands {
    /// Store a snapshot JSON file for the current user.
    Import {
        /// Path to the snapshot document
        file: String,
    },
    /// Print the stored snapshot for the current user.
    Export,
}
