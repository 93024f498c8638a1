use fit_core::responses::FitReport;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AdvisoryArgs;
use crate::commands::alerts;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fitc report`.
pub async fn handle(args: &AdvisoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.load_snapshot().await?;
    let report = FitReport {
        metrics: fit_engine::compute_metrics(&snapshot),
        alerts: alerts::collect(&snapshot, args.advisory, ctx).await?,
    };
    output(&report, flags.format)
}
