//! Wire payloads for the prediction service.

use serde::{Deserialize, Serialize};

/// Request body for `POST /predict`.
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub url: &'a str,
}

/// Response body from `POST /predict`. Both fields are required: a free-text
/// label and the phishing probability in `[0, 1]`. Extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictResponse {
    pub result: String,
    pub probability: f64,
}

/// Response body from `GET /health`; only the status string matters here.
#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// True if the service labeled the URL as phishing.
///
/// Case-insensitive; every other label, including ones this client has never
/// seen, counts as safe. The check is for the phishing label, not for some
/// known-safe label.
pub fn is_phishing_label(result: &str) -> bool {
    result.eq_ignore_ascii_case("phishing")
}
