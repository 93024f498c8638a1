use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{AlertType, TargetView};

/// A prioritized notification, generated either by the rule engine or by the
/// advisory service. Lower `priority` is more urgent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub priority: u8,
    pub title: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_target: Option<TargetView>,
}
