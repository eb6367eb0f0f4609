// src/config.rs
use std::time::Duration;

use crate::error::{AppError, Result};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_RELAY_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the assistant backend (`/chat`, `/summary`).
    pub backend_url: String,
    /// Base URL of the relay server, used by relay-backed lookups.
    pub relay_url: String,
    pub bind_addr: String,
    /// `None` means outbound requests may hang forever.
    pub request_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            relay_url: DEFAULT_RELAY_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            request_timeout: None,
        }
    }
}

impl Config {
    /// Build a config from `RIGAUD_*` environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(url) = non_empty(lookup("RIGAUD_BACKEND_URL")) {
            config.backend_url = url;
        }
        if let Some(url) = non_empty(lookup("RIGAUD_RELAY_URL")) {
            config.relay_url = url;
        }
        if let Some(addr) = non_empty(lookup("RIGAUD_BIND_ADDR")) {
            config.bind_addr = addr;
        }
        if let Some(raw) = non_empty(lookup("RIGAUD_REQUEST_TIMEOUT_SECS")) {
            let secs: u64 = raw.parse().map_err(|_| {
                AppError::Config(format!("RIGAUD_REQUEST_TIMEOUT_SECS must be an integer, got '{}'", raw))
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
