use chrono::{DateTime, NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ActionStatus, ActionType};

/// A Kanban action item, optionally contributing to a strategic goal.
///
/// `deadline` is kept as the raw text the user entered so that a malformed
/// date never prevents the snapshot from loading.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActionItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub action_type: ActionType,
    pub status: ActionStatus,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub deadline: String,
    #[serde(default)]
    pub impact: u8,
    #[serde(default)]
    pub effort: u8,
    #[serde(default, rename = "linkedGoalId")]
    pub goal_id: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub risk: Option<String>,
}

impl ActionItem {
    /// Parsed deadline, or `None` when the text is not a recognizable date.
    #[must_use]
    pub fn deadline_date(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.deadline)
    }

    /// An action is overdue when it is not done and its deadline lies strictly
    /// before `today`. Unparseable deadlines are never overdue.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.status.is_done() && self.deadline_date().is_some_and(|deadline| deadline < today)
    }

    /// Whether this action is linked to the goal with the given id.
    #[must_use]
    pub fn contributes_to(&self, goal_id: &str) -> bool {
        self.goal_id.as_deref() == Some(goal_id)
    }
}

/// Parse a user-entered date (deadlines, history entries) as a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the UTC date is used) and naive
/// `YYYY-MM-DDTHH:MM:SS` timestamps.
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.to_utc().date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|timestamp| timestamp.date())
}
