//! Runtime configuration for the gateway. Values come from environment
//! variables (a `.env` file is honoured) and fall back to defaults that
//! target a local Ollama instance.
use std::time::Duration;

use anyhow::{Context, Result, bail};
use dotenvy::dotenv;

use crate::services::retry::RetryPolicy;

pub const DEFAULT_MODEL: &str = "llama3.2";
pub const DEFAULT_OLLAMA_HOST: &str = "http://127.0.0.1:11434";

#[derive(Clone, Debug)]
pub struct Config {
    pub model: String,
    pub ollama_host: String,
    pub retry: RetryPolicy,
    /// `None` means the upstream call has no deadline.
    pub upstream_timeout: Option<Duration>,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            ollama_host: DEFAULT_OLLAMA_HOST.to_string(),
            retry: RetryPolicy::default(),
            upstream_timeout: None,
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, so tests need not touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let model = lookup("CHAT_MODEL").unwrap_or(defaults.model);
        let ollama_host = lookup("OLLAMA_HOST")
            .map(|h| h.trim_end_matches('/').to_string())
            .unwrap_or(defaults.ollama_host);

        let max_attempts: u32 = match lookup("MAX_RETRIES") {
            Some(v) => v
                .parse()
                .with_context(|| format!("MAX_RETRIES must be an integer, got {v:?}"))?,
            None => defaults.retry.max_attempts,
        };
        if max_attempts == 0 {
            bail!("MAX_RETRIES must be at least 1");
        }

        let delay = match lookup("RETRY_DELAY_SECS") {
            Some(v) => parse_secs(&v).context("RETRY_DELAY_SECS")?,
            None => defaults.retry.delay,
        };

        let upstream_timeout = lookup("UPSTREAM_TIMEOUT_SECS")
            .map(|v| parse_secs(&v).context("UPSTREAM_TIMEOUT_SECS"))
            .transpose()?;

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port: u16 = match lookup("PORT") {
            Some(v) => v
                .parse()
                .with_context(|| format!("PORT must be a port number, got {v:?}"))?,
            None => defaults.port,
        };

        Ok(Config {
            model,
            ollama_host,
            retry: RetryPolicy {
                max_attempts,
                delay,
            },
            upstream_timeout,
            host,
            port,
        })
    }

    /// Host and port in a form `TcpListener::bind` resolves, so host names
    /// such as `localhost` work as well as IP literals.
    pub fn bind_target(&self) -> (&str, u16) {
        (self.host.as_str(), self.port)
    }
}

fn parse_secs(value: &str) -> Result<Duration> {
    let secs: f64 = value
        .parse()
        .with_context(|| format!("expected seconds, got {value:?}"))?;
    Duration::try_from_secs_f64(secs).with_context(|| format!("invalid duration {value:?}"))
}
