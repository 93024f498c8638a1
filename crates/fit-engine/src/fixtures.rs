//! Snapshot builders shared by the engine tests.

use chrono::NaiveDate;
use fit_core::entities::{ActionItem, FitCheckScore, Snapshot, StrategicGoal};
use fit_core::enums::{ActionStatus, ActionType, FitDomain, Trend, ValueDimension};

/// Reference date for every fixture: 2026-05-10.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 5, 10).unwrap()
}

pub fn goal(id: &str, kpi: Option<&str>) -> StrategicGoal {
    StrategicGoal {
        id: id.to_string(),
        dimension: ValueDimension::Organization,
        description: format!("Goal {id}"),
        horizon: "2028".to_string(),
        kpi_id: kpi.map(str::to_string),
        priority: 1,
    }
}

pub fn action(id: &str, status: ActionStatus, deadline: &str, goal: Option<&str>) -> ActionItem {
    ActionItem {
        id: id.to_string(),
        title: format!("Action {id}"),
        action_type: ActionType::Changing,
        status,
        owner: "Noor".to_string(),
        deadline: deadline.to_string(),
        impact: 3,
        effort: 3,
        goal_id: goal.map(str::to_string),
        origin: None,
        risk: None,
    }
}

pub fn score(domain: FitDomain, value: f64) -> FitCheckScore {
    FitCheckScore {
        domain,
        score: value,
        description: String::new(),
        suggestion: String::new(),
        trend: Trend::Stable,
    }
}

/// A snapshot with every collection populated and mission/vision filled in.
///
/// Scores 70 domain, 55 execution (one overdue), 75 coverage, 100 confidence.
pub fn populated() -> Snapshot {
    let mut snapshot = Snapshot {
        goals: vec![goal("g1", Some("kpi-1")), goal("g2", None)],
        actions: vec![
            action("a1", ActionStatus::Done, "2026-04-01", Some("g1")),
            action("a2", ActionStatus::Doing, "2026-04-15", Some("g1")),
            action("a3", ActionStatus::Todo, "2026-09-01", None),
            action("a4", ActionStatus::Done, "2026-03-01", None),
            action("a5", ActionStatus::Done, "2026-05-01", Some("g2")),
        ],
        fit_check_scores: vec![
            score(FitDomain::Structure, 4.0),
            score(FitDomain::Resources, 2.0),
            score(FitDomain::Culture, 3.5),
            score(FitDomain::People, 4.5),
        ],
        ..Snapshot::default()
    };
    snapshot.inrichting.mission = "Zorg dichtbij huis".to_string();
    snapshot.inrichting.vision = "De meest nabije zorgverlener van de regio".to_string();
    snapshot
}
