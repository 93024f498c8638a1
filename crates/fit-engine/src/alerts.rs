//! Rule-based alerts.
//!
//! Rules are evaluated in a fixed order and every match is emitted:
//!
//! 1. goal without KPI → info, priority 2
//! 2. goal without any linked action → warning, priority 1
//! 3. one or more overdue actions → a single warning, priority 1
//! 4. domain scoring 2 or lower → warning, priority 1
//!
//! The result is stable-sorted by priority, so alerts of equal priority keep
//! rule order.

use chrono::NaiveDate;
use fit_core::entities::{Alert, Snapshot};
use fit_core::enums::{AlertType, TargetView};

const URGENT: u8 = 1;
const ADVISORY: u8 = 2;

/// Domains at or below this score are flagged.
const CRITICAL_DOMAIN_SCORE: f64 = 2.0;

/// Evaluate all alert rules as of today (UTC).
#[must_use]
pub fn compute_alerts(snapshot: &Snapshot) -> Vec<Alert> {
    compute_alerts_at(snapshot, crate::today())
}

/// Evaluate all alert rules with `today` as the reference date.
#[must_use]
pub fn compute_alerts_at(snapshot: &Snapshot, today: NaiveDate) -> Vec<Alert> {
    let mut alerts = Vec::new();

    for goal in snapshot.goals.iter().filter(|goal| !goal.has_kpi()) {
        alerts.push(Alert {
            id: format!("sys-kpi-{}", goal.id),
            alert_type: AlertType::Info,
            priority: ADVISORY,
            title: "Ontbrekende KPI".to_string(),
            message: format!(
                "Het doel '{}' heeft nog geen gekoppelde KPI en is daardoor niet meetbaar.",
                goal.description
            ),
            goal_id: Some(goal.id.clone()),
            action_label: Some("KPI koppelen".to_string()),
            action_target: Some(TargetView::Goals),
        });
    }

    for goal in &snapshot.goals {
        if snapshot.actions_for(&goal.id).next().is_some() {
            continue;
        }
        alerts.push(Alert {
            id: format!("sys-action-{}", goal.id),
            alert_type: AlertType::Warning,
            priority: URGENT,
            title: "Geen acties".to_string(),
            message: format!(
                "Voor het doel '{}' zijn nog geen acties gepland.",
                goal.description
            ),
            goal_id: Some(goal.id.clone()),
            action_label: Some("Actie plannen".to_string()),
            action_target: Some(TargetView::Execution),
        });
    }

    let overdue = snapshot
        .actions
        .iter()
        .filter(|action| action.is_overdue(today))
        .count();
    if overdue > 0 {
        alerts.push(Alert {
            id: "sys-overdue".to_string(),
            alert_type: AlertType::Warning,
            priority: URGENT,
            title: "Achterstallige acties".to_string(),
            message: format!("{overdue} actie(s) hebben de deadline overschreden."),
            goal_id: None,
            action_label: Some("Bekijk acties".to_string()),
            action_target: Some(TargetView::Execution),
        });
    }

    for (index, entry) in snapshot.fit_check_scores.iter().enumerate() {
        if entry.score > CRITICAL_DOMAIN_SCORE {
            continue;
        }
        alerts.push(Alert {
            id: format!("sys-domain-{}-{index}", entry.domain),
            alert_type: AlertType::Warning,
            priority: URGENT,
            title: "Kritiek Domein".to_string(),
            message: format!(
                "Het domein {} scoort {}/5 en vraagt directe aandacht.",
                entry.domain.label(),
                entry.score
            ),
            goal_id: None,
            action_label: Some("Bekijk FIT-check".to_string()),
            action_target: Some(TargetView::Assessment),
        });
    }

    alerts.sort_by_key(|alert| alert.priority);
    alerts
}

/// Concatenate rule alerts with advisory alerts and re-sort by priority.
///
/// Rule alerts come first among equal priorities.
#[must_use]
pub fn merge_alerts(system: Vec<Alert>, advisory: Vec<Alert>) -> Vec<Alert> {
    let mut merged = system;
    merged.extend(advisory);
    merged.sort_by_key(|alert| alert.priority);
    merged
}
