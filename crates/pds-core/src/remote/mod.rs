//! HTTP client for the remote prediction service.
//!
//! Speaks the service's two-route contract: `POST /predict` with the URL as
//! JSON, `GET /health` as a liveness probe. Every call builds a fresh curl
//! handle, makes exactly one attempt and never follows redirects; retrying
//! or recovering is the orchestrator's business. Calls block the current
//! thread, so async code reaches them through `spawn_blocking`.

mod error;
mod parse;

pub use error::RemoteError;
pub use parse::{is_phishing_label, HealthResponse, PredictRequest, PredictResponse};

use std::time::Duration;

use crate::config::PdsConfig;

/// Classifies URLs against a remote predictive service.
///
/// The orchestrator depends on this trait rather than on a concrete client,
/// so tests can substitute canned outcomes without a live service.
pub trait RemoteClassifier: Send + Sync {
    /// Sends `url` for classification. Blocking, exactly one request.
    fn classify(&self, url: &str) -> Result<PredictResponse, RemoteError>;
}

/// Production client for the prediction service.
#[derive(Debug, Clone)]
pub struct PredictClient {
    endpoint: String,
    connect_timeout: Duration,
    request_timeout: Duration,
}

impl PredictClient {
    /// Client for a service base endpoint such as `http://127.0.0.1:5000`.
    pub fn new(
        endpoint: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            connect_timeout,
            request_timeout,
        }
    }

    /// Client using the configured endpoint and timeouts.
    pub fn from_config(cfg: &PdsConfig) -> Self {
        Self::new(
            cfg.endpoint.clone(),
            Duration::from_secs(cfg.connect_timeout_secs),
            Duration::from_secs(cfg.request_timeout_secs),
        )
    }

    fn route(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), path)
    }

    /// Probes `GET /health` and returns the status string the service
    /// reports. A non-2xx answer, such as 503 while the model is still
    /// loading, is an error.
    pub fn health(&self) -> Result<String, RemoteError> {
        let body = self.perform(&self.route("health"), None)?;
        let health: HealthResponse = serde_json::from_slice(&body).map_err(RemoteError::Body)?;
        Ok(health.status)
    }

    /// One curl transfer: GET when `payload` is `None`, JSON POST otherwise.
    /// Returns the raw body after the 2xx check.
    fn perform(&self, url: &str, payload: Option<&[u8]>) -> Result<Vec<u8>, RemoteError> {
        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.request_timeout)?;

        if let Some(data) = payload {
            easy.post(true)?;
            easy.post_fields_copy(data)?;
            let mut headers = curl::easy::List::new();
            headers.append("Content-Type: application/json")?;
            headers.append("Accept: application/json")?;
            easy.http_headers(headers)?;
        }

        let mut body = Vec::new();
        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        if code < 200 || code >= 300 {
            return Err(RemoteError::Status(code));
        }
        Ok(body)
    }
}

impl RemoteClassifier for PredictClient {
    fn classify(&self, url: &str) -> Result<PredictResponse, RemoteError> {
        let payload = serde_json::to_vec(&PredictRequest { url }).map_err(RemoteError::Body)?;
        let body = self.perform(&self.route("predict"), Some(&payload))?;
        serde_json::from_slice(&body).map_err(RemoteError::Body)
    }
}
