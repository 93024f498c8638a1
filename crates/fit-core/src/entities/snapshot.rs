use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{
    ActionItem, FitCheckScore, HistoryPoint, Inrichting, OrganizationProfile, StrategicGoal,
};
use crate::errors::CoreError;

/// Full application state at a point in time.
///
/// Owned by the surrounding application; the engine only ever borrows it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub profile: OrganizationProfile,
    pub inrichting: Inrichting,
    pub goals: Vec<StrategicGoal>,
    pub actions: Vec<ActionItem>,
    pub fit_check_scores: Vec<FitCheckScore>,
    pub history: Vec<HistoryPoint>,
}

impl Snapshot {
    /// Look up a goal by id.
    #[must_use]
    pub fn goal(&self, id: &str) -> Option<&StrategicGoal> {
        self.goals.iter().find(|goal| goal.id == id)
    }

    /// Actions linked to the given goal.
    pub fn actions_for<'a>(&'a self, goal_id: &'a str) -> impl Iterator<Item = &'a ActionItem> {
        self.actions
            .iter()
            .filter(move |action| action.contributes_to(goal_id))
    }

    /// Problems that break references between entities: duplicate goal or
    /// action ids and actions linked to a goal that does not exist.
    #[must_use]
    pub fn structural_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        let mut goal_ids = HashSet::new();
        for goal in &self.goals {
            if !goal_ids.insert(goal.id.as_str()) {
                issues.push(format!("duplicate goal id '{}'", goal.id));
            }
        }

        let mut action_ids = HashSet::new();
        for action in &self.actions {
            if !action_ids.insert(action.id.as_str()) {
                issues.push(format!("duplicate action id '{}'", action.id));
            }
            if let Some(goal_id) = &action.goal_id
                && !goal_ids.contains(goal_id.as_str())
            {
                issues.push(format!(
                    "action '{}' links to unknown goal '{goal_id}'",
                    action.id
                ));
            }
        }

        issues
    }

    /// Field values the engine falls back on: unreadable deadlines (never
    /// overdue), impact/effort outside 1-5 and assessment scores outside 1-5
    /// (clamped).
    #[must_use]
    pub fn data_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for action in &self.actions {
            if action.deadline_date().is_none() {
                warnings.push(format!(
                    "action '{}' has unreadable deadline '{}'",
                    action.id, action.deadline
                ));
            }
            for (field, value) in [("impact", action.impact), ("effort", action.effort)] {
                if !(1..=5).contains(&value) {
                    warnings.push(format!(
                        "action '{}' has {field} {value} outside 1-5",
                        action.id
                    ));
                }
            }
        }

        for score in &self.fit_check_scores {
            if !(1.0..=5.0).contains(&score.score) {
                warnings.push(format!(
                    "domain '{}' has score {} outside 1-5",
                    score.domain, score.score
                ));
            }
        }

        warnings
    }

    /// Every structural issue followed by every data warning.
    #[must_use]
    pub fn validation_issues(&self) -> Vec<String> {
        let mut issues = self.structural_issues();
        issues.extend(self.data_warnings());
        issues
    }

    /// Fail with [`CoreError::Validation`] listing every integrity problem.
    ///
    /// # Errors
    ///
    /// Returns an error when [`Self::validation_issues`] is non-empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        into_result(self.validation_issues())
    }

    /// Like [`Self::validate`], but only structural issues fail.
    ///
    /// # Errors
    ///
    /// Returns an error when [`Self::structural_issues`] is non-empty.
    pub fn validate_structure(&self) -> Result<(), CoreError> {
        into_result(self.structural_issues())
    }
}

fn into_result(issues: Vec<String>) -> Result<(), CoreError> {
    if issues.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(issues.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::{ActionStatus, ActionType, FitDomain, Trend, ValueDimension};

    fn goal(id: &str) -> StrategicGoal {
        StrategicGoal {
            id: id.to_string(),
            dimension: ValueDimension::Customer,
            description: "Raise NPS".to_string(),
            horizon: "2027".to_string(),
            kpi_id: None,
            priority: 1,
        }
    }

    fn action(id: &str, goal_id: Option<&str>) -> ActionItem {
        ActionItem {
            id: id.to_string(),
            title: "Customer panel".to_string(),
            action_type: ActionType::Changing,
            status: ActionStatus::Todo,
            owner: String::new(),
            deadline: "2026-06-01".to_string(),
            impact: 3,
            effort: 2,
            goal_id: goal_id.map(str::to_string),
            origin: None,
            risk: None,
        }
    }

    #[test]
    fn empty_document_deserializes_to_default() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(snapshot, Snapshot::default());
        assert!(snapshot.validate().is_ok());
    }

    #[test]
    fn actions_for_filters_by_goal_link() {
        let snapshot = Snapshot {
            goals: vec![goal("g1"), goal("g2")],
            actions: vec![action("a1", Some("g1")), action("a2", Some("g2")), action("a3", None)],
            ..Snapshot::default()
        };
        let ids: Vec<&str> = snapshot.actions_for("g1").map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a1"]);
        assert!(snapshot.goal("g2").is_some());
        assert!(snapshot.goal("g9").is_none());
    }

    #[test]
    fn validation_reports_every_problem() {
        let mut broken = action("a1", Some("missing"));
        broken.deadline = "soon".to_string();
        broken.impact = 0;
        let snapshot = Snapshot {
            goals: vec![goal("g1"), goal("g1")],
            actions: vec![broken],
            fit_check_scores: vec![FitCheckScore {
                domain: FitDomain::Culture,
                score: 7.0,
                description: String::new(),
                suggestion: String::new(),
                trend: Trend::Stable,
            }],
            ..Snapshot::default()
        };

        let issues = snapshot.validation_issues();
        assert_eq!(
            issues,
            vec![
                "duplicate goal id 'g1'".to_string(),
                "action 'a1' links to unknown goal 'missing'".to_string(),
                "action 'a1' has unreadable deadline 'soon'".to_string(),
                "action 'a1' has impact 0 outside 1-5".to_string(),
                "domain 'culture' has score 7 outside 1-5".to_string(),
            ]
        );
        assert!(matches!(snapshot.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn data_warnings_do_not_break_structure() {
        let mut sloppy = action("a1", Some("g1"));
        sloppy.deadline = String::new();
        sloppy.impact = 0;
        sloppy.effort = 0;
        let snapshot = Snapshot {
            goals: vec![goal("g1")],
            actions: vec![sloppy],
            ..Snapshot::default()
        };

        assert!(snapshot.structural_issues().is_empty());
        assert_eq!(snapshot.data_warnings().len(), 3);
        assert!(snapshot.validate_structure().is_ok());
        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn dangling_link_fails_structure() {
        let snapshot = Snapshot {
            goals: vec![goal("g1")],
            actions: vec![action("a1", Some("g2")), action("a1", None)],
            ..Snapshot::default()
        };
        assert_eq!(
            snapshot.structural_issues(),
            vec![
                "action 'a1' links to unknown goal 'g2'".to_string(),
                "duplicate action id 'a1'".to_string(),
            ]
        );
        assert!(snapshot.validate_structure().is_err());
    }
}
