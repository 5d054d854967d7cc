//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use exchange_rates::DEFAULT_BASE_URL;

/// Which rate source adapter backs the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateSourceKind {
    /// Remote quote provider over HTTP.
    Http,
    /// Hardcoded table, no network.
    Static,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub port: u16,
    pub rate_source: RateSourceKind,
    pub rate_source_url: String,
    pub rate_source_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = var("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = var("PORT")
            .unwrap_or_else(|| "8080".to_string())
            .parse()?;

        let rate_source = match var("RATE_SOURCE").as_deref() {
            None | Some("http") => RateSourceKind::Http,
            Some("static") => RateSourceKind::Static,
            Some(other) => anyhow::bail!("RATE_SOURCE must be \"http\" or \"static\", got {other:?}"),
        };

        let rate_source_url =
            var("RATE_SOURCE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_secs: u64 = var("RATE_SOURCE_TIMEOUT_SECS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|_| anyhow::anyhow!("RATE_SOURCE_TIMEOUT_SECS must be a whole number of seconds"))?;

        let log_format = match var("LOG_FORMAT").as_deref() {
            None | Some("text") => LogFormat::Text,
            Some("json") => LogFormat::Json,
            Some(other) => anyhow::bail!("LOG_FORMAT must be \"text\" or \"json\", got {other:?}"),
        };

        Ok(Self {
            bind_addr,
            port,
            rate_source,
            rate_source_url,
            rate_source_timeout: Duration::from_secs(timeout_secs),
            log_format,
        })
    }

    /// Address the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}
