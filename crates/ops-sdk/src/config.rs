use crate::error::{Result, SdkError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const CONFIG_PATH_ENV: &str = "OPS_SDK_CONFIG";
pub const DAEMON_URL_ENV: &str = "SDK_DAEMON_URL";
pub const TIMEOUT_ENV: &str = "SDK_TIMEOUT_SECS";

// ---------------------------------------------------------------------------
// SdkConfig
// ---------------------------------------------------------------------------

/// Settings for the SDK client.
///
/// With no daemon URL the client falls back to logging tracked events
/// instead of sending them, so the templates still run outside the platform.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SdkConfig {
    #[serde(default)]
    pub daemon_url: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            daemon_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SdkConfig {
    /// Load a YAML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: SdkConfig = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    /// Resolve the effective config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolve config from a variable lookup: the file named by
    /// `OPS_SDK_CONFIG` first, then individual variables on top.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match lookup(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            Some(path) => Self::load(&PathBuf::from(path))?,
            None => Self::default(),
        };

        if let Some(url) = lookup(DAEMON_URL_ENV) {
            let url = url.trim().to_string();
            config.daemon_url = if url.is_empty() { None } else { Some(url) };
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            config.timeout_secs = raw.trim().parse().map_err(|_| {
                SdkError::InvalidConfig(format!("{TIMEOUT_ENV} must be a whole number, got '{raw}'"))
            })?;
        }

        Ok(config)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
