use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{FitDomain, Trend};

/// Assessment outcome for one organizational domain, on a 1–5 scale.
///
/// Produced by the advisory service from the raw questionnaire answers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FitCheckScore {
    pub domain: FitDomain,
    pub score: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub suggestion: String,
    #[serde(default)]
    pub trend: Trend,
}
