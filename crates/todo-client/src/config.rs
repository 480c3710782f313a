//! Client Configuration
//!
//! Base URL and session refresh interval, with compile-time overrides
//! so the WASM bundle can be pointed at another server.

use std::time::Duration;

use crate::error::ConfigError;

/// Default API server
pub const DEFAULT_BASE_URL: &str = "http://localhost:8090";

/// Server tokens live 30 minutes; renew well before that
pub const DEFAULT_SESSION_REFRESH: Duration = Duration::from_secs(25 * 60);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    session_refresh: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_refresh: DEFAULT_SESSION_REFRESH,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Self::default().with_base_url(base_url)
    }

    /// Defaults overridden by `TODO_API_BASE_URL` / `TODO_SESSION_REFRESH_SECS`
    /// set at build time
    pub fn from_build_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(url) = option_env!("TODO_API_BASE_URL") {
            config = config.with_base_url(url)?;
        }
        if let Some(secs) = option_env!("TODO_SESSION_REFRESH_SECS") {
            config = config.with_session_refresh(parse_secs("TODO_SESSION_REFRESH_SECS", secs)?);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_session_refresh(mut self, interval: Duration) -> Self {
        self.session_refresh = interval;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session_refresh(&self) -> Duration {
        self.session_refresh
    }

    /// Full URL for an API endpoint
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn parse_secs(name: &'static str, value: &str) -> Result<Duration, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        }),
    }
}
