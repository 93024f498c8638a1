//! Report types produced by `fit-engine` and printed by `fitc`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Alert, HistoryPoint};
use crate::enums::{FitStatus, Trend};

/// Composite health report for a snapshot. All scores are percentages 0–100.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub total_fit: u8,
    pub domain_score: u8,
    pub execution_score: u8,
    pub coverage_score: u8,
    pub data_confidence: u8,
    pub status: FitStatus,
    pub breakdown: String,
}

/// Trend over the assessment history log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub cycles: usize,
    pub latest: Option<HistoryPoint>,
    pub previous: Option<HistoryPoint>,
    /// `latest.score - previous.score` on the 1–5 scale, two decimals.
    pub delta: f64,
    pub direction: Trend,
}

/// Response from `fitc report`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FitReport {
    pub metrics: MetricsReport,
    pub alerts: Vec<Alert>,
}

/// Response from `fitc validate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ValidationResponse {
    pub valid: bool,
    pub issues: Vec<String>,
}
