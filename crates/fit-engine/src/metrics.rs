//! Composite fit score.
//!
//! ```text
//! total = round(domain * 0.4 + execution * 0.3 + coverage * 0.3)
//! ```
//!
//! Sub-scores are percentages. Each has a fixed fallback for "no data":
//! domain 40 (unassessed), execution 50 (neutral), coverage 0 (nothing to
//! cover). The composite is computed from the unrounded sub-scores and
//! rounded once; the reported sub-scores are rounded individually.

use chrono::NaiveDate;
use fit_core::entities::Snapshot;
use fit_core::enums::FitStatus;
use fit_core::responses::MetricsReport;

const DOMAIN_WEIGHT: f64 = 0.4;
const EXECUTION_WEIGHT: f64 = 0.3;
const COVERAGE_WEIGHT: f64 = 0.3;

const UNASSESSED_DOMAIN_SCORE: f64 = 40.0;
const NEUTRAL_EXECUTION_SCORE: f64 = 50.0;
const OVERDUE_PENALTY: f64 = 5.0;
const MAX_OVERDUE_PENALTY: f64 = 25.0;
/// Weight of each half (KPI linkage, action linkage) of the coverage score.
const COVERAGE_HALF: f64 = 50.0;
const CONFIDENCE_STEP: u8 = 20;

/// Scale factor from the 1–5 assessment scale to a percentage.
const SCORE_TO_PERCENT: f64 = 20.0;

/// Compute the metrics report as of today (UTC).
#[must_use]
pub fn compute_metrics(snapshot: &Snapshot) -> MetricsReport {
    compute_metrics_at(snapshot, crate::today())
}

/// Compute the metrics report with `today` as the reference date for
/// overdue detection.
#[must_use]
pub fn compute_metrics_at(snapshot: &Snapshot, today: NaiveDate) -> MetricsReport {
    let domain = domain_score(snapshot);
    let execution = execution_score(snapshot, today);
    let coverage = coverage_score(snapshot);

    let total_fit = percent(weighted_total(domain, execution, coverage));
    let status = classify(total_fit);

    MetricsReport {
        total_fit,
        domain_score: percent(domain),
        execution_score: percent(execution),
        coverage_score: percent(coverage),
        data_confidence: data_confidence(snapshot),
        status,
        breakdown: narrative(status).to_string(),
    }
}

/// Map a total fit score to its status band.
///
/// `Instabiel` is the fallthrough: anything not below 35, not above 75 and not
/// in `(50, 75]` lands there, which puts exactly 35 and exactly 50 in it.
#[must_use]
pub const fn classify(total_fit: u8) -> FitStatus {
    if total_fit < 35 {
        FitStatus::Kritiek
    } else if total_fit > 75 {
        FitStatus::Optimaal
    } else if total_fit > 50 && total_fit <= 75 {
        FitStatus::Stabiel
    } else {
        FitStatus::Instabiel
    }
}

/// Canned summary shown next to the score.
#[must_use]
pub const fn narrative(status: FitStatus) -> &'static str {
    match status {
        FitStatus::Kritiek => {
            "De strategische fit is kritiek. Doelen, uitvoering en organisatie sluiten \
             onvoldoende op elkaar aan; koppel eerst elk doel aan een KPI en een actie."
        }
        FitStatus::Instabiel => {
            "De basis is aanwezig maar nog instabiel. Maak doelen meetbaar en versterk \
             de uitvoering om de fit te verbeteren."
        }
        FitStatus::Stabiel => {
            "De organisatie staat er stabiel voor. Strategie en uitvoering sluiten \
             grotendeels aan; stuur bij op de zwakste schakel."
        }
        FitStatus::Optimaal => {
            "De strategische fit is optimaal. Strategie en uitvoering versterken elkaar; \
             borg deze werkwijze en blijf meten."
        }
    }
}

#[allow(clippy::suboptimal_flops)]
fn weighted_total(domain: f64, execution: f64, coverage: f64) -> f64 {
    domain * DOMAIN_WEIGHT + execution * EXECUTION_WEIGHT + coverage * COVERAGE_WEIGHT
}

fn domain_score(snapshot: &Snapshot) -> f64 {
    let scores = &snapshot.fit_check_scores;
    if scores.is_empty() {
        return UNASSESSED_DOMAIN_SCORE;
    }
    let sum: f64 = scores.iter().map(|entry| entry.score).sum();
    (sum / count(scores.len()) * SCORE_TO_PERCENT).clamp(0.0, 100.0)
}

fn execution_score(snapshot: &Snapshot, today: NaiveDate) -> f64 {
    let actions = &snapshot.actions;
    if actions.is_empty() {
        return NEUTRAL_EXECUTION_SCORE;
    }

    let completed = actions.iter().filter(|a| a.status.is_done()).count();
    let overdue = actions.iter().filter(|a| a.is_overdue(today)).count();

    let rate = count(completed) / count(actions.len()) * 100.0;
    let penalty = (count(overdue) * OVERDUE_PENALTY).min(MAX_OVERDUE_PENALTY);
    (rate - penalty).max(0.0)
}

#[allow(clippy::suboptimal_flops)]
fn coverage_score(snapshot: &Snapshot) -> f64 {
    let goals = &snapshot.goals;
    if goals.is_empty() {
        return 0.0;
    }

    let total = count(goals.len());
    let measurable = goals.iter().filter(|goal| goal.has_kpi()).count();
    let actioned = goals
        .iter()
        .filter(|goal| snapshot.actions_for(&goal.id).next().is_some())
        .count();

    count(measurable) / total * COVERAGE_HALF + count(actioned) / total * COVERAGE_HALF
}

fn data_confidence(snapshot: &Snapshot) -> u8 {
    [
        snapshot.inrichting.has_mission(),
        snapshot.inrichting.has_vision(),
        !snapshot.goals.is_empty(),
        !snapshot.fit_check_scores.is_empty(),
        !snapshot.actions.is_empty(),
    ]
    .into_iter()
    .filter(|present| *present)
    .map(|_| CONFIDENCE_STEP)
    .sum()
}

#[allow(clippy::cast_precision_loss)]
fn count(n: usize) -> f64 {
    n as f64
}

/// Round half away from zero into `0..=100`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 100.0).round() as u8
}
