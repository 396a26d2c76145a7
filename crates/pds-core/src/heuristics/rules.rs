//! The fixed rule set behind the local risk score.
//!
//! Every rule is an independent weighted predicate over the raw URL string.
//! Weights of matching rules add up; rules never suppress each other. The
//! order of `RiskRule::ALL` is the canonical reporting order and has no
//! effect on the score.

/// Keywords commonly planted in credential-harvesting URLs.
const DECEPTIVE_KEYWORDS: &[&str] = &[
    "login", "signin", "verify", "account", "security", "update", "password", "webscr", "confirm",
];

/// URLs longer than this count as obfuscated.
const LONG_URL_CHARS: usize = 80;

/// More dots than this suggests stacked look-alike subdomains.
const MAX_DOTS: usize = 3;

/// More hyphens than this suggests a composed look-alike domain.
const MAX_HYPHENS: usize = 4;

/// One weighted predicate of the local scoring policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskRule {
    /// A deceptive keyword ("login", "verify", ...) appears anywhere.
    DeceptiveKeyword,
    /// The URL is longer than 80 characters.
    ExcessiveLength,
    /// An '@' appears anywhere; browsers discard everything before it.
    EmbeddedAt,
    /// More than 3 dots or more than 4 hyphens.
    ExcessiveSeparators,
    /// A dotted-quad (raw IPv4) pattern appears anywhere.
    DottedQuad,
}

impl RiskRule {
    /// Canonical rule order for breakdown output.
    pub const ALL: [RiskRule; 5] = [
        RiskRule::DeceptiveKeyword,
        RiskRule::ExcessiveLength,
        RiskRule::EmbeddedAt,
        RiskRule::ExcessiveSeparators,
        RiskRule::DottedQuad,
    ];

    /// Weight added to the score when this rule matches.
    pub fn weight(self) -> u32 {
        match self {
            RiskRule::DeceptiveKeyword => 2,
            RiskRule::ExcessiveLength => 1,
            RiskRule::EmbeddedAt => 3,
            RiskRule::ExcessiveSeparators => 2,
            RiskRule::DottedQuad => 3,
        }
    }

    /// Short label for breakdown output.
    pub fn description(self) -> &'static str {
        match self {
            RiskRule::DeceptiveKeyword => "deceptive keyword",
            RiskRule::ExcessiveLength => "excessive length",
            RiskRule::EmbeddedAt => "embedded '@'",
            RiskRule::ExcessiveSeparators => "excessive dots or hyphens",
            RiskRule::DottedQuad => "raw IP address pattern",
        }
    }

    /// True when this rule's predicate holds for `url`.
    pub fn matches(self, url: &str) -> bool {
        match self {
            RiskRule::DeceptiveKeyword => {
                let lower = url.to_lowercase();
                DECEPTIVE_KEYWORDS.iter().any(|kw| lower.contains(kw))
            }
            RiskRule::ExcessiveLength => url.chars().count() > LONG_URL_CHARS,
            RiskRule::EmbeddedAt => url.contains('@'),
            RiskRule::ExcessiveSeparators => {
                url.matches('.').count() > MAX_DOTS || url.matches('-').count() > MAX_HYPHENS
            }
            RiskRule::DottedQuad => contains_dotted_quad(url),
        }
    }
}

/// True if `url` contains four runs of one to three digits joined by single
/// dots. Octet values are not range-checked, so "999.1.1.1" matches; this is
/// a shape test, not an address validator.
fn contains_dotted_quad(url: &str) -> bool {
    let bytes = url.as_bytes();
    (0..bytes.len()).any(|start| dotted_quad_at(bytes, start))
}

/// Match a quad whose first group starts exactly at `start`. The three
/// dot-terminated groups must be runs of one to three digits ending at their
/// dot; the final group needs at least one digit and may run on, so a quad
/// embedded in a longer digit string (one dot-adjacent side short enough)
/// still matches somewhere via the outer scan.
fn dotted_quad_at(bytes: &[u8], start: usize) -> bool {
    let mut at = start;
    for group in 0..4u8 {
        let mut digits = 0;
        while digits < 3 && at + digits < bytes.len() && bytes[at + digits].is_ascii_digit() {
            digits += 1;
        }
        if digits == 0 {
            return false;
        }
        at += digits;
        if group < 3 {
            if at >= bytes.len() || bytes[at] != b'.' {
                return false;
            }
            at += 1;
        }
    }
    true
}
