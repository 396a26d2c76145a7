use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global configuration, loaded from `~/.config/pds/config.toml`.
///
/// Every field has a default, so a partial file (or none at all) still
/// yields a working config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdsConfig {
    /// Base endpoint of the prediction service (scheme, host, port).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Seconds allowed for the connect phase of a remote call.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Seconds allowed for a whole remote call, connect included.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Milliseconds to wait before returning a fallback verdict, masking the
    /// latency gap between the two classification paths. 0 disables it.
    #[serde(default = "default_fallback_delay")]
    pub fallback_delay_ms: u64,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_connect_timeout() -> u64 {
    15
}

fn default_request_timeout() -> u64 {
    30
}

fn default_fallback_delay() -> u64 {
    2000
}

impl Default for PdsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            connect_timeout_secs: default_connect_timeout(),
            request_timeout_secs: default_request_timeout(),
            fallback_delay_ms: default_fallback_delay(),
        }
    }
}

impl PdsConfig {
    /// The fallback masking delay as a `Duration`.
    pub fn fallback_delay(&self) -> Duration {
        Duration::from_millis(self.fallback_delay_ms)
    }
}

/// Path of the config file inside the XDG config home.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pds")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, writing a default file if none exists.
pub fn load_or_init() -> Result<PdsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PdsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Parse a config file at an explicit path.
pub fn load_from_path(path: &Path) -> Result<PdsConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: PdsConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
