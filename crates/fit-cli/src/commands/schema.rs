use anyhow::bail;
use fit_core::entities::{Alert, Snapshot};
use fit_core::responses::{FitReport, HistorySummary, MetricsReport};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPE_NAMES: &[&str] = &[
    "snapshot",
    "metrics_report",
    "alert",
    "history_summary",
    "fit_report",
];

/// Handle `fitc schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.as_str() {
        "snapshot" => schema_for!(Snapshot),
        "metrics_report" => schema_for!(MetricsReport),
        "alert" => schema_for!(Alert),
        "history_summary" => schema_for!(HistorySummary),
        "fit_report" => schema_for!(FitReport),
        other => bail!(
            "unknown schema type '{other}' (expected one of: {})",
            TYPE_NAMES.join(", ")
        ),
    };
    output(&schema, flags.format)
}
