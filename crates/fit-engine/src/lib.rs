//! # fit-engine
//!
//! Pure scoring and alert rules over a [`Snapshot`](fit_core::entities::Snapshot).
//!
//! Every function here is total and synchronous: empty or malformed input
//! resolves to a documented default, nothing is logged, nothing is mutated.
//! The `*_at` variants take the reference date explicitly; the plain variants
//! use today's UTC date.

pub mod alerts;
pub mod history;
pub mod metrics;

#[cfg(test)]
mod fixtures;

pub use alerts::{compute_alerts, compute_alerts_at, merge_alerts};
pub use history::summarize_history;
pub use metrics::{classify, compute_metrics, compute_metrics_at};

use chrono::{NaiveDate, Utc};

fn today() -> NaiveDate {
    Utc::now().date_naive()
}
