use std::env;
use std::time::Duration;

use anyhow::{Context, bail};
use tokio::sync::Semaphore;

use crate::upstream::DEFAULT_BASE_URL;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub joke_api_base_url: String,
    pub upstream_timeout: Duration,
    pub max_concurrent_requests: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let port: u16 = match lookup("PORT") {
            Some(value) => value.parse::<u16>().context("PORT must be a valid number")?,
            None => 50051,
        };
        let timeout_ms: u64 = match lookup("UPSTREAM_TIMEOUT_MS") {
            Some(value) => value
                .parse::<u64>()
                .context("UPSTREAM_TIMEOUT_MS must be a valid number")?,
            None => 10_000,
        };
        let max_concurrent_requests: usize = match lookup("MAX_CONCURRENT_REQUESTS") {
            Some(value) => value
                .parse::<usize>()
                .context("MAX_CONCURRENT_REQUESTS must be a valid number")?,
            None => 10,
        };
        if max_concurrent_requests == 0 || max_concurrent_requests > Semaphore::MAX_PERMITS {
            bail!(
                "MAX_CONCURRENT_REQUESTS must be between 1 and {}",
                Semaphore::MAX_PERMITS
            );
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "::".to_string()),
            port,
            joke_api_base_url: lookup("JOKE_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            upstream_timeout: Duration::from_millis(timeout_ms),
            max_concurrent_requests,
            log_level: lookup("RUST_LOG").unwrap_or_else(|| "chuck_norris_grpc=info".to_string()),
        })
    }

    /// Host without IPv6 brackets, suitable for name resolution
    pub fn bind_host(&self) -> &str {
        self.host.trim_start_matches('[').trim_end_matches(']')
    }

    pub fn bind_address(&self) -> String {
        let host = self.bind_host();
        if host.contains(':') {
            format!("[{}]:{}", host, self.port)
        } else {
            format!("{}:{}", host, self.port)
        }
    }
}
