//! Local rule-based URL risk scoring.
//!
//! This is the deterministic fallback classifier used when the prediction
//! service cannot be reached: a fixed set of weighted string predicates,
//! summed into a score and cut at a hard threshold. Pure string work, no
//! I/O and no shared state, so the same input always scores the same.

mod rules;

pub use rules::RiskRule;

/// Scores at or above this are classified suspicious.
pub const SUSPICION_THRESHOLD: u32 = 3;

/// Outcome of local scoring: the verdict plus the raw score behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskAssessment {
    pub is_safe: bool,
    pub score: u32,
}

/// Sum of the weights of every matching rule.
pub fn score(url: &str) -> u32 {
    RiskRule::ALL
        .into_iter()
        .filter(|rule| rule.matches(url))
        .map(RiskRule::weight)
        .sum()
}

/// Scores `url` and applies the suspicion threshold.
///
/// Empty input is well-defined here (score 0, safe); rejecting it is the
/// caller's job before scoring is reached.
pub fn classify(url: &str) -> RiskAssessment {
    let score = score(url);
    RiskAssessment {
        is_safe: score < SUSPICION_THRESHOLD,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_url_scores_zero() {
        let assessment = classify("https://example.com");
        assert_eq!(assessment.score, 0);
        assert!(assessment.is_safe);
    }

    #[test]
    fn layered_lookalike_url() {
        // 70 chars, 5 dots, 4 hyphens: keyword (+2) and dots (+2) match,
        // length and hyphens stay just under their limits.
        let url = "http://paypal.com.verify-login-account.security-update.example-site.co";
        let assessment = classify(url);
        assert_eq!(assessment.score, 4);
        assert!(!assessment.is_safe);
    }

    #[test]
    fn credential_embedding_with_raw_ip() {
        // '@' (+3), dotted quad (+3), "login" (+2); only 3 dots.
        let assessment = classify("http://user@192.168.0.1/login");
        assert_eq!(assessment.score, 8);
        assert!(!assessment.is_safe);
    }

    #[test]
    fn threshold_boundary() {
        // One keyword only: score 2, still safe.
        assert!(classify("https://login.example").is_safe);
        // One '@' only: score 3, exactly at the threshold, suspicious.
        let at_threshold = classify("https://ex@mple.com");
        assert_eq!(at_threshold.score, 3);
        assert!(!at_threshold.is_safe);
    }

    #[test]
    fn rules_are_additive_and_independent() {
        // quad + '@' with no other rule matching.
        assert_eq!(score("http://1.2.3.4@server"), 6);
        // Adding a keyword moves the score by exactly its weight.
        assert_eq!(score("http://1.2.3.4@server/update"), 8);
    }

    #[test]
    fn scoring_is_deterministic() {
        let url = "http://user@192.168.0.1/login";
        assert_eq!(classify(url), classify(url));
        assert_eq!(score(url), score(url));
    }

    #[test]
    fn length_contributes_one() {
        // 90 'a's after the scheme: only the length rule matches.
        let url = format!("http://{}", "a".repeat(90));
        let assessment = classify(&url);
        assert_eq!(assessment.score, 1);
        assert!(assessment.is_safe);
    }

    #[test]
    fn empty_string_scores_zero() {
        assert_eq!(score(""), 0);
        assert!(classify("").is_safe);
    }
}
