//! `pds health` – probe the prediction service's health endpoint.

use anyhow::{Context, Result};

use pds_core::config::PdsConfig;
use pds_core::remote::PredictClient;

pub async fn run_health(cfg: &PdsConfig, endpoint_override: Option<&str>) -> Result<()> {
    let mut effective = cfg.clone();
    if let Some(endpoint) = endpoint_override {
        effective.endpoint = endpoint.to_string();
    }
    let endpoint = effective.endpoint.clone();
    let client = PredictClient::from_config(&effective);

    let status = tokio::task::spawn_blocking(move || client.health())
        .await
        .context("health probe task join")?
        .with_context(|| format!("prediction service at {endpoint} failed the health probe"))?;

    println!(
        "prediction service at {} is up (status: {})",
        effective.endpoint, status
    );
    Ok(())
}
