//! Config loading from environment variables

use std::time::Duration;

use text_analyzer::SummarizerConfig;
use text_analyzer::config::DEFAULT_TIMEOUT_SECS;

use super::constants::DEFAULT_BIND_ADDR;
use crate::errors::ApiError;

/// Environment variable names
const ENV_BIND_ADDR: &str = "TEXT_ANALYZER_BIND_ADDR";
const ENV_API_KEY: &str = "OPENROUTER_API_KEY";
const ENV_MODEL: &str = "OPENROUTER_MODEL";
const ENV_BASE_URL: &str = "OPENROUTER_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "OPENROUTER_TIMEOUT_SECS";

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:8000")
  pub bind_addr: String,
  /// Summarization client settings
  pub summarizer: SummarizerConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// A missing `OPENROUTER_API_KEY` is not an error: the server still starts and
  /// every summary degrades to an error string.
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// Used by `from_env`; tests pass a map instead of touching the process environment.
  ///
  /// # Errors
  /// Returns an error if a value is invalid
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let bind_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let mut summarizer = SummarizerConfig::default();
    if let Some(api_key) = lookup(ENV_API_KEY) {
      summarizer = summarizer.with_api_key(api_key);
    }
    if let Some(model) = lookup(ENV_MODEL).filter(|m| !m.trim().is_empty()) {
      summarizer = summarizer.with_model(model);
    }
    if let Some(base_url) = lookup(ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
      summarizer = summarizer.with_base_url(base_url);
    }

    let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
      Some(raw) => parse_timeout_secs(&raw)?,
      None => DEFAULT_TIMEOUT_SECS,
    };
    summarizer = summarizer.with_timeout(Duration::from_secs(timeout_secs));

    summarizer.validate().map_err(|e| ApiError::config(e.to_string()))?;

    Ok(Self { bind_addr, summarizer })
  }
}

fn parse_timeout_secs(raw: &str) -> crate::errors::Result<u64> {
  match raw.trim().parse::<u64>() {
    Ok(secs) if secs > 0 => Ok(secs),
    _ => Err(ApiError::config(format!(
      "{ENV_TIMEOUT_SECS} must be a positive integer (seconds): {raw}"
    ))),
  }
}
