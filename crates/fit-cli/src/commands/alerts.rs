use fit_advisory::AdvisoryService;
use fit_core::entities::{Alert, Snapshot};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AdvisoryArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fitc alerts`.
pub async fn handle(args: &AdvisoryArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.load_snapshot().await?;
    let alerts = collect(&snapshot, args.advisory, ctx).await?;
    output(&alerts, flags.format)
}

/// Rule alerts, merged with advisory alerts when requested.
///
/// A missing advisory configuration is an error; a failing advisory service
/// only drops the advisory part.
pub async fn collect(
    snapshot: &Snapshot,
    with_advisory: bool,
    ctx: &AppContext,
) -> anyhow::Result<Vec<Alert>> {
    let system = fit_engine::compute_alerts(snapshot);
    if !with_advisory {
        return Ok(system);
    }

    let advisory = ctx.advisory()?;
    Ok(merge_advisory(system, &advisory, &ctx.user_id, snapshot).await)
}

async fn merge_advisory<S: AdvisoryService>(
    system: Vec<Alert>,
    service: &S,
    user_id: &str,
    snapshot: &Snapshot,
) -> Vec<Alert> {
    match service.advisory_alerts(user_id, snapshot).await {
        Ok(advisory) => {
            tracing::debug!(count = advisory.len(), "merging advisory alerts");
            fit_engine::merge_alerts(system, advisory)
        }
        Err(error) => {
            tracing::warn!(%error, "advisory service unavailable; showing rule alerts only");
            system
        }
    }
}
