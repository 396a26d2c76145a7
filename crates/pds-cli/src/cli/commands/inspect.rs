//! `pds inspect <url>` – offline anatomy and rule breakdown.

use anyhow::Result;

use pds_core::heuristics::{self, RiskRule, SUSPICION_THRESHOLD};
use pds_core::url_parts::UrlParts;

pub fn run_inspect(url: &str) -> Result<()> {
    let url = url.trim();
    if url.is_empty() {
        anyhow::bail!("empty URL argument; give a URL to inspect");
    }

    println!("URL: {url}");
    match UrlParts::parse(url) {
        Ok(parts) => {
            let host = match parts.port {
                Some(port) => format!("{}:{}", parts.host, port),
                None => parts.host.clone(),
            };
            println!("  scheme: {}  host: {}  path: {}", parts.scheme, host, parts.path);
            if let Some(query) = &parts.query {
                println!("  query: {query}");
            }
        }
        // Scoring below still applies; the rules work on the raw string.
        Err(err) => println!("  (not parseable as a URL: {err:#})"),
    }

    let matched: Vec<RiskRule> = RiskRule::ALL
        .into_iter()
        .filter(|rule| rule.matches(url))
        .collect();
    if matched.is_empty() {
        println!("matched rules: none");
    } else {
        println!("matched rules:");
        for rule in matched {
            println!("  {} (+{})", rule.description(), rule.weight());
        }
    }

    let assessment = heuristics::classify(url);
    let verdict_str = if assessment.is_safe { "safe" } else { "SUSPICIOUS" };
    println!(
        "local score: {} (threshold {}): {}",
        assessment.score, SUSPICION_THRESHOLD, verdict_str
    );
    Ok(())
}
