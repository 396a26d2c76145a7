//! Dual-path classification: remote prediction first, local rules on failure.
//!
//! One remote attempt per URL, no retries. Any failure on that attempt, from
//! a refused connection to an unparseable body, silently hands the decision
//! to the local scorer after a fixed masking delay, so the caller always gets
//! one normalized [`Verdict`]. Remote failures are the expected fallback
//! trigger and never escape this module.

mod verdict;

pub use verdict::{Verdict, VerdictSource};

use std::sync::Arc;
use std::time::Duration;

use crate::heuristics;
use crate::remote::{is_phishing_label, RemoteClassifier};

/// Rejection of an empty or whitespace-only URL submission. The one input
/// problem that short-circuits both paths.
#[derive(Debug)]
pub struct EmptyUrlError;

impl std::fmt::Display for EmptyUrlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no URL given (empty or whitespace-only input)")
    }
}

impl std::error::Error for EmptyUrlError {}

/// Classifies `url`, remote-first with local fallback.
///
/// `fallback_delay` is slept before a heuristic verdict is returned so the
/// fallback path does not answer suspiciously faster than the remote one; it
/// is never applied when the remote service answered. `Duration::ZERO`
/// disables it.
pub async fn classify_url(
    client: Arc<dyn RemoteClassifier>,
    url: &str,
    fallback_delay: Duration,
) -> Result<Verdict, EmptyUrlError> {
    if url.trim().is_empty() {
        return Err(EmptyUrlError);
    }

    let submitted = url.to_string();
    let outcome = tokio::task::spawn_blocking(move || client.classify(&submitted)).await;

    let verdict = match outcome {
        Ok(Ok(response)) => {
            tracing::debug!(
                result = %response.result,
                probability = response.probability,
                "remote verdict received"
            );
            Verdict {
                url: url.to_string(),
                is_safe: !is_phishing_label(&response.result),
                source: VerdictSource::Remote,
                confidence: Some(response.probability),
            }
        }
        Ok(Err(err)) => {
            tracing::warn!(
                error = %err,
                protocol = err.is_protocol(),
                "prediction service failed, falling back to local rules"
            );
            heuristic_verdict(url, fallback_delay).await
        }
        Err(join_err) => {
            tracing::warn!(error = %join_err, "remote classification task died, falling back to local rules");
            heuristic_verdict(url, fallback_delay).await
        }
    };

    if verdict.is_safe {
        tracing::info!(url = %verdict.url, source = ?verdict.source, "URL classified safe");
    } else {
        tracing::warn!(url = %verdict.url, source = ?verdict.source, "phishing risk detected");
    }
    Ok(verdict)
}

/// Scores locally after the masking delay. Claims no probability.
async fn heuristic_verdict(url: &str, delay: Duration) -> Verdict {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    let assessment = heuristics::classify(url);
    tracing::debug!(score = assessment.score, "local rule score");
    Verdict {
        url: url.to_string(),
        is_safe: assessment.is_safe,
        source: VerdictSource::Heuristic,
        confidence: None,
    }
}
