use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fitc metrics`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.load_snapshot().await?;
    let report = fit_engine::compute_metrics(&snapshot);
    tracing::debug!(total_fit = report.total_fit, status = %report.status, "metrics computed");
    output(&report, flags.format)
}
