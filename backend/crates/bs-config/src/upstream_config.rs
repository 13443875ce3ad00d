use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_UPSTREAM_TIMEOUT_SECS, MAX_UPSTREAM_TIMEOUT_SECS,
    MIN_UPSTREAM_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Upstream project-management API settings.
///
/// There are no built-in defaults for `base_url` or `api_key`; both must be
/// supplied through `config.toml` or the environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// API root, e.g. `https://example.backlog.jp/api/v2`
    pub base_url: String,
    /// Sent as the `apiKey` query parameter. Never logged.
    pub api_key: Option<String>,
    /// Per-request timeout for the upstream call
    pub timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: None,
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl UpstreamConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::upstream("upstream.base_url is required"));
        }

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::upstream(format!(
                "upstream.base_url must start with http:// or https://, got {}",
                base_url
            )));
        }

        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => {}
            _ => return Err(ConfigError::upstream("upstream.api_key is required")),
        }

        if self.timeout_secs < MIN_UPSTREAM_TIMEOUT_SECS
            || self.timeout_secs > MAX_UPSTREAM_TIMEOUT_SECS
        {
            return Err(ConfigError::upstream(format!(
                "upstream.timeout_secs must be {}-{}, got {}",
                MIN_UPSTREAM_TIMEOUT_SECS, MAX_UPSTREAM_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        Ok(())
    }

    /// Base URL without surrounding whitespace or trailing slashes
    pub fn base_url(&self) -> &str {
        self.base_url.trim().trim_end_matches('/')
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
