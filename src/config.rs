// src/config.rs
use std::env;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid BIND_ADDR `{value}`: {reason}")]
    BindAddr { value: String, reason: String },
    #[error("invalid MAX_WORKERS `{0}`: expected a positive integer")]
    MaxWorkers(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on.
    pub bind_addr: SocketAddr,
    /// Size of the astra worker pool.
    pub max_workers: usize,
    /// Key for third-party page integrations. Not used by the catalog itself.
    pub api_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `BIND_ADDR`, `MAX_WORKERS` and `API_KEY`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup("BIND_ADDR") {
            cfg.bind_addr = raw.trim().parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::BindAddr {
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(raw) = lookup("MAX_WORKERS") {
            cfg.max_workers = raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| ConfigError::MaxWorkers(raw.clone()))?;
        }

        cfg.api_key = lookup("API_KEY").filter(|k| !k.trim().is_empty());

        Ok(cfg)
    }
}
