//! Trend over the assessment history log.

use fit_core::entities::{HistoryPoint, parse_calendar_date};
use fit_core::enums::Trend;
use fit_core::responses::HistorySummary;

/// Movements smaller than this on the 1–5 scale count as stable.
const STABLE_BAND: f64 = 0.05;

/// Summarize the history log into its latest movement.
///
/// Points are ordered by date; points whose date cannot be parsed keep their
/// log order after all dated points.
#[must_use]
pub fn summarize_history(history: &[HistoryPoint]) -> HistorySummary {
    let mut ordered: Vec<&HistoryPoint> = history.iter().collect();
    ordered.sort_by_key(|point| {
        let date = parse_calendar_date(&point.date);
        (date.is_none(), date)
    });

    let latest = ordered.last().copied();
    let previous = ordered.len().checked_sub(2).map(|index| ordered[index]);

    let delta = match (latest, previous) {
        (Some(latest), Some(previous)) => round_two(latest.score - previous.score),
        _ => 0.0,
    };
    let direction = if delta > STABLE_BAND {
        Trend::Up
    } else if delta < -STABLE_BAND {
        Trend::Down
    } else {
        Trend::Stable
    };

    HistorySummary {
        cycles: history.len(),
        latest: latest.cloned(),
        previous: previous.cloned(),
        delta,
        direction,
    }
}

fn round_two(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
