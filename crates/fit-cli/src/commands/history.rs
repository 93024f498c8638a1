use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fitc history`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.load_snapshot().await?;
    output(&fit_engine::summarize_history(&snapshot.history), flags.format)
}
