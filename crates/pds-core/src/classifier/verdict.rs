//! The normalized verdict both classification paths produce.

use serde::Serialize;

/// Which path actually produced the verdict, never the path merely tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictSource {
    /// The remote predictive service answered.
    Remote,
    /// The local rule scorer decided after a remote failure.
    Heuristic,
}

/// One classification outcome, identical in shape for both paths.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// The URL as classified.
    pub url: String,
    /// False means phishing risk.
    pub is_safe: bool,
    /// The path that produced this verdict.
    pub source: VerdictSource,
    /// Phishing probability reported by the remote service; `None` on the
    /// heuristic path, which has no calibrated probability to offer.
    pub confidence: Option<f64>,
}
