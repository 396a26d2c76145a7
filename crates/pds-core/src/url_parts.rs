//! URL anatomy: scheme, host, port, path and query for display.

use anyhow::{anyhow, Context, Result};

/// Structural pieces of a URL, for inspection output and logs. Carries no
/// policy; suspicion lives in [`crate::heuristics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub scheme: String,
    pub host: String,
    /// Explicit port only; `None` when the URL relies on the scheme default.
    pub port: Option<u16>,
    pub path: String,
    pub query: Option<String>,
}

impl UrlParts {
    /// Break a URL into its parts. Fails on anything the `url` crate cannot
    /// parse, or on URLs without a host (`mailto:`, `file:///...`).
    pub fn parse(url: &str) -> Result<Self> {
        let parsed = url::Url::parse(url).with_context(|| format!("invalid URL: {url}"))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| anyhow!("URL has no host: {url}"))?
            .to_string();
        Ok(Self {
            scheme: parsed.scheme().to_string(),
            host,
            port: parsed.port(),
            path: parsed.path().to_string(),
            query: parsed.query().map(str::to_string),
        })
    }
}
