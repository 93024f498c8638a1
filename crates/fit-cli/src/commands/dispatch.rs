use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Metrics => commands::metrics::handle(ctx, flags).await,
        Commands::Alerts(args) => commands::alerts::handle(&args, ctx, flags).await,
        Commands::Report(args) => commands::report::handle(&args, ctx, flags).await,
        Commands::History => commands::history::handle(ctx, flags).await,
        Commands::Validate => commands::validate::handle(ctx, flags).await,
        Commands::Snapshot { action } => commands::snapshot::handle(&action, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
