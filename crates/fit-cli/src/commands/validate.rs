use fit_core::responses::ValidationResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `fitc validate`. Fails after printing when issues were found.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let snapshot = ctx.load_snapshot().await?;
    let issues = snapshot.validation_issues();
    let response = ValidationResponse {
        valid: issues.is_empty(),
        issues,
    };
    output(&response, flags.format)?;

    snapshot.validate()?;
    Ok(())
}
