use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ValueDimension;

/// A strategic goal placed on one dimension of the value wheel.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StrategicGoal {
    pub id: String,
    pub dimension: ValueDimension,
    pub description: String,
    #[serde(default)]
    pub horizon: String,
    #[serde(default)]
    pub kpi_id: Option<String>,
    #[serde(default)]
    pub priority: i32,
}

impl StrategicGoal {
    /// Whether the goal is measurable through a linked KPI.
    #[must_use]
    pub fn has_kpi(&self) -> bool {
        self.kpi_id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }
}
