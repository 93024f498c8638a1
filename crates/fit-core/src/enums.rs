//! Closed enums for Fitcheck entities and reports.
//!
//! Tags that arrive as free text from the surrounding application (value
//! dimensions, domains, statuses, alert kinds) are modelled as closed enums so
//! every `match` over them is checked for exhaustiveness.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ValueDimension
// ---------------------------------------------------------------------------

/// One of the five value-wheel dimensions used to categorize goals and KPIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValueDimension {
    Financial,
    Customer,
    Employee,
    Organization,
    Social,
}

impl ValueDimension {
    pub const ALL: [Self; 5] = [
        Self::Financial,
        Self::Customer,
        Self::Employee,
        Self::Organization,
        Self::Social,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Financial => "financial",
            Self::Customer => "customer",
            Self::Employee => "employee",
            Self::Organization => "organization",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for ValueDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActionType
// ---------------------------------------------------------------------------

/// Whether an action keeps the business running or changes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ActionType {
    Running,
    Changing,
}

impl ActionType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Changing => "Changing",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ActionStatus
// ---------------------------------------------------------------------------

/// Kanban column of an action item.
///
/// Any status is reachable from any other; there is no transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Todo,
    Doing,
    Done,
}

impl ActionStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::Doing => "doing",
            Self::Done => "done",
        }
    }

    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FitDomain
// ---------------------------------------------------------------------------

/// One of the four organizational domains assessed by the FIT check.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FitDomain {
    Structure,
    Resources,
    Culture,
    People,
}

impl FitDomain {
    pub const ALL: [Self; 4] = [Self::Structure, Self::Resources, Self::Culture, Self::People];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Resources => "resources",
            Self::Culture => "culture",
            Self::People => "people",
        }
    }

    /// Display label used in alert messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Structure => "Structuur",
            Self::Resources => "Middelen",
            Self::Culture => "Cultuur",
            Self::People => "Mensen",
        }
    }
}

impl fmt::Display for FitDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Direction of change between assessment cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AlertType
// ---------------------------------------------------------------------------

/// Kind of alert shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    Warning,
    Opportunity,
    Info,
}

impl AlertType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Opportunity => "opportunity",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TargetView
// ---------------------------------------------------------------------------

/// View an alert's call-to-action points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TargetView {
    /// Goal definition (value wheel).
    Goals,
    /// Execution planning (action board).
    Execution,
    /// FIT check questionnaire.
    Assessment,
    Dashboard,
}

impl TargetView {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Goals => "goals",
            Self::Execution => "execution",
            Self::Assessment => "assessment",
            Self::Dashboard => "dashboard",
        }
    }
}

impl fmt::Display for TargetView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FitStatus
// ---------------------------------------------------------------------------

/// Classification of the composite fit score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum FitStatus {
    Kritiek,
    Instabiel,
    Stabiel,
    Optimaal,
}

impl FitStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kritiek => "Kritiek",
            Self::Instabiel => "Instabiel",
            Self::Stabiel => "Stabiel",
            Self::Optimaal => "Optimaal",
        }
    }
}

impl fmt::Display for FitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
