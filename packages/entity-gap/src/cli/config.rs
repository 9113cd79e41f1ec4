use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Settings loaded from environment variables
#[derive(Clone)]
pub struct Config {
    pub textrazor_api_key: Option<String>,
    pub textrazor_base_url: Option<String>,
    pub concurrency: usize,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            textrazor_api_key: env::var("TEXTRAZOR_API_KEY").ok(),
            textrazor_base_url: env::var("TEXTRAZOR_BASE_URL").ok(),
            concurrency: env::var("ENTITY_GAP_CONCURRENCY")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .context("ENTITY_GAP_CONCURRENCY must be a valid number")?,
            request_timeout: Duration::from_secs(
                env::var("TEXTRAZOR_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("TEXTRAZOR_TIMEOUT_SECS must be a valid number")?,
            ),
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("textrazor_api_key", &self.textrazor_api_key.as_ref().map(|_| "[REDACTED]"))
            .field("textrazor_base_url", &self.textrazor_base_url)
            .field("concurrency", &self.concurrency)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
