use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::FitDomain;

/// One completed assessment cycle in the append-only history log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryPoint {
    pub date: String,
    /// Aggregate score on the 1–5 scale.
    pub score: f64,
    #[serde(default)]
    pub domain_scores: BTreeMap<FitDomain, f64>,
}
