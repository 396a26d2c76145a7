//! `pds check <url>...` – classify URLs, remote-first with local fallback.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

use pds_core::classifier::{self, Verdict, VerdictSource};
use pds_core::config::PdsConfig;
use pds_core::remote::{PredictClient, RemoteClassifier};

pub async fn run_check(
    cfg: &PdsConfig,
    urls: &[String],
    endpoint_override: Option<&str>,
    json: bool,
) -> Result<()> {
    let mut effective = cfg.clone();
    if let Some(endpoint) = endpoint_override {
        effective.endpoint = endpoint.to_string();
    }
    let client: Arc<dyn RemoteClassifier> = Arc::new(PredictClient::from_config(&effective));
    let delay = effective.fallback_delay();

    if json {
        let mut verdicts = Vec::with_capacity(urls.len());
        for url in urls {
            verdicts.push(classify_one(&client, url, delay).await?);
        }
        println!("{}", serde_json::to_string_pretty(&verdicts)?);
    } else {
        println!("{:<12} {:<10} {:<12} {}", "VERDICT", "SOURCE", "CONFIDENCE", "URL");
        for url in urls {
            let verdict = classify_one(&client, url, delay).await?;
            print_row(&verdict);
        }
    }
    Ok(())
}

async fn classify_one(
    client: &Arc<dyn RemoteClassifier>,
    url: &str,
    delay: Duration,
) -> Result<Verdict> {
    let url = url.trim();
    if url.is_empty() {
        anyhow::bail!("empty URL argument; give a URL to check");
    }
    Ok(classifier::classify_url(Arc::clone(client), url, delay).await?)
}

fn print_row(verdict: &Verdict) {
    let verdict_str = if verdict.is_safe { "safe" } else { "SUSPICIOUS" };
    let source_str = match verdict.source {
        VerdictSource::Remote => "remote",
        VerdictSource::Heuristic => "heuristic",
    };
    let confidence_str = verdict
        .confidence
        .map(|p| format!("{:.1}%", p * 100.0))
        .unwrap_or_else(|| "-".to_string());
    println!(
        "{:<12} {:<10} {:<12} {}",
        verdict_str, source_str, confidence_str, verdict.url
    );
}
