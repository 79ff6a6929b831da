use anyhow::{Context, Result};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
const DEFAULT_TIMEOUT_MS: u64 = 15_000;

/// Process configuration, read once at startup and injected into the
/// handler state. The API key is optional here: its absence is reported
/// per-request as a classified error, never as a startup failure.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub dev_mode: bool,
    pub base_url: String,
    pub timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().context("PORT is not a valid port number")?,
            Err(_) => 8787,
        };
        let timeout_ms = match std::env::var("DEEPSEEK_TIMEOUT_MS") {
            Ok(raw) => raw
                .parse()
                .context("DEEPSEEK_TIMEOUT_MS is not a valid millisecond count")?,
            Err(_) => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            api_key: std::env::var("DEEPSEEK_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            dev_mode: std::env::var("NODE_ENV")
                .map(|v| v == "development")
                .unwrap_or(false),
            base_url: std::env::var("DEEPSEEK_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_millis(timeout_ms),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            dev_mode: false,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            host: "0.0.0.0".to_string(),
            port: 8787,
        }
    }
}
