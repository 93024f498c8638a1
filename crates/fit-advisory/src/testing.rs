//! Scripted advisory service for decorator tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use fit_core::entities::{Alert, Snapshot};
use fit_core::enums::AlertType;

use crate::AdvisoryService;
use crate::error::AdvisoryError;

pub fn alert(id: &str, priority: u8) -> Alert {
    Alert {
        id: id.to_string(),
        alert_type: AlertType::Opportunity,
        priority,
        title: format!("Advies {id}"),
        message: "Gegenereerd advies".to_string(),
        goal_id: None,
        action_label: None,
        action_target: None,
    }
}

/// Replays queued results in order; answers `Ok(vec![])` once exhausted.
pub struct ScriptedService {
    responses: Mutex<VecDeque<Result<Vec<Alert>, AdvisoryError>>>,
    calls: AtomicUsize,
    latency: Duration,
}

impl ScriptedService {
    pub fn new(responses: Vec<Result<Vec<Alert>, AdvisoryError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
            latency: Duration::ZERO,
        }
    }

    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AdvisoryService for ScriptedService {
    async fn advisory_alerts(
        &self,
        _user_id: &str,
        _snapshot: &Snapshot,
    ) -> Result<Vec<Alert>, AdvisoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Vec::new()));
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        next
    }
}
