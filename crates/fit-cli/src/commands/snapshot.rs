use std::path::Path;

use anyhow::Context;
use fit_store::SnapshotStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SnapshotCommands;
use crate::context::{AppContext, read_snapshot_file};
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImportResponse {
    user_id: String,
    goals: usize,
    actions: usize,
    assessments: usize,
    history: usize,
    warnings: Vec<String>,
}

/// Handle `fitc snapshot`.
pub async fn handle(
    action: &SnapshotCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SnapshotCommands::Import { file } => {
            let snapshot = read_snapshot_file(Path::new(file)).await?;
            snapshot
                .validate_structure()
                .with_context(|| format!("refusing to import {file}"))?;
            let warnings = snapshot.data_warnings();
            for warning in &warnings {
                tracing::warn!(file = %file, "{warning}");
            }

            ctx.store
                .save(&ctx.user_id, &snapshot)
                .await
                .with_context(|| format!("failed to store snapshot for user '{}'", ctx.user_id))?;
            tracing::info!(user_id = %ctx.user_id, file = %file, "snapshot imported");

            output(
                &ImportResponse {
                    user_id: ctx.user_id.clone(),
                    goals: snapshot.goals.len(),
                    actions: snapshot.actions.len(),
                    assessments: snapshot.fit_check_scores.len(),
                    history: snapshot.history.len(),
                    warnings,
                },
                flags.format,
            )
        }
        SnapshotCommands::Export => {
            let snapshot = ctx.load_snapshot().await?;
            output(&snapshot, flags.format)
        }
    }
}
