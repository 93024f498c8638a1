//! HTTP advisory client.
//!
//! The service is opaque: it receives the snapshot and answers with alerts in
//! the same shape the rule engine produces.

use fit_config::AdvisoryConfig;
use fit_core::entities::{Alert, Snapshot};
use serde::{Deserialize, Serialize};

use crate::AdvisoryService;
use crate::error::AdvisoryError;
use crate::http::check_response;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdvisoryRequest<'a> {
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<&'a str>,
    snapshot: &'a Snapshot,
}

#[derive(Deserialize)]
struct AdvisoryResponse {
    #[serde(default)]
    alerts: Vec<Alert>,
}

/// Posts snapshots to the configured advisory endpoint.
#[derive(Debug, Clone)]
pub struct HttpAdvisoryClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: Option<String>,
}

impl HttpAdvisoryClient {
    /// Build a client from configuration.
    ///
    /// The per-request timeout is not set here; [`crate::Resilient`] owns it.
    ///
    /// # Errors
    ///
    /// Returns [`AdvisoryError::NotConfigured`] when endpoint or key is missing,
    /// or [`AdvisoryError::Http`] when the underlying client fails to build.
    pub fn from_config(config: &AdvisoryConfig) -> Result<Self, AdvisoryError> {
        if !config.is_configured() {
            return Err(AdvisoryError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("fitcheck/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: (!config.model.is_empty()).then(|| config.model.clone()),
        })
    }
}

impl AdvisoryService for HttpAdvisoryClient {
    async fn advisory_alerts(
        &self,
        user_id: &str,
        snapshot: &Snapshot,
    ) -> Result<Vec<Alert>, AdvisoryError> {
        let request = AdvisoryRequest {
            user_id,
            model: self.model.as_deref(),
            snapshot,
        };
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        parse_alerts(&body)
    }
}

fn parse_alerts(body: &str) -> Result<Vec<Alert>, AdvisoryError> {
    let data: AdvisoryResponse =
        serde_json::from_str(body).map_err(|error| AdvisoryError::Parse(error.to_string()))?;
    tracing::debug!(count = data.alerts.len(), "advisory alerts received");
    Ok(data.alerts)
}
