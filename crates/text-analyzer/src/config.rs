// crates/text-analyzer/src/config.rs

use std::time::Duration;

use crate::errors::ConfigError;

/// Default OpenRouter model identifier.
pub const DEFAULT_MODEL: &str = "meta-llama/llama-3.2-3b-instruct:free";

/// Default OpenRouter API base URL (without the `/chat/completions` suffix).
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default total timeout of one summarization call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Value sent as `HTTP-Referer`, used by OpenRouter for app attribution.
pub const DEFAULT_REFERER: &str = "http://localhost:8000";

/// Value sent as `X-Title`, used by OpenRouter for app attribution.
pub const DEFAULT_APP_TITLE: &str = "AI Text Analyzer";

/// Upper bound of generated tokens per summary.
pub const MAX_SUMMARY_TOKENS: u32 = 150;

/// Sampling temperature of the summary request.
pub const SUMMARY_TEMPERATURE: f64 = 0.7;

/// Immutable configuration of the summarization client.
///
/// Loaded once at startup and injected into [`crate::OpenRouterSummarizer`];
/// nothing in this crate reads the environment on its own.
#[derive(Clone)]
pub struct SummarizerConfig {
  /// OpenRouter API key. `None` disables summarization (every call fails fast).
  pub api_key: Option<String>,
  /// Model identifier sent in the request body.
  pub model: String,
  /// API base URL, e.g. `https://openrouter.ai/api/v1`.
  pub base_url: String,
  /// Total timeout of one outbound call.
  pub timeout: Duration,
  /// `HTTP-Referer` header value.
  pub referer: String,
  /// `X-Title` header value.
  pub app_title: String,
}

impl Default for SummarizerConfig {
  fn default() -> Self {
    Self {
      api_key: None,
      model: DEFAULT_MODEL.to_string(),
      base_url: DEFAULT_BASE_URL.to_string(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
      referer: DEFAULT_REFERER.to_string(),
      app_title: DEFAULT_APP_TITLE.to_string(),
    }
  }
}

impl SummarizerConfig {
  /// Sets the API key. Blank keys are treated as "not configured".
  #[must_use]
  pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
    let api_key = api_key.into();
    self.api_key = if api_key.trim().is_empty() { None } else { Some(api_key) };
    self
  }

  /// Sets the model identifier.
  #[must_use]
  pub fn with_model(mut self, model: impl Into<String>) -> Self {
    self.model = model.into();
    self
  }

  /// Sets the API base URL.
  #[must_use]
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Sets the total request timeout.
  #[must_use]
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Whether an API key is present.
  pub fn has_api_key(&self) -> bool {
    self.api_key.is_some()
  }

  /// Full URL of the chat-completions endpoint.
  pub fn completions_url(&self) -> String {
    format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
  }

  /// Validates value ranges.
  ///
  /// # Errors
  /// - model or base URL is empty
  /// - timeout is zero
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.model.trim().is_empty() {
      return Err(ConfigError::EmptyModel);
    }
    if self.base_url.trim().is_empty() {
      return Err(ConfigError::EmptyBaseUrl);
    }
    if self.timeout.is_zero() {
      return Err(ConfigError::ZeroTimeout);
    }
    Ok(())
  }
}

// The API key must never end up in logs.
impl std::fmt::Debug for SummarizerConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SummarizerConfig")
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .field("model", &self.model)
      .field("base_url", &self.base_url)
      .field("timeout", &self.timeout)
      .field("referer", &self.referer)
      .field("app_title", &self.app_title)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_values() {
    let config = SummarizerConfig::default();
    assert!(!config.has_api_key());
    assert_eq!(config.model, "meta-llama/llama-3.2-3b-instruct:free");
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.completions_url(), "https://openrouter.ai/api/v1/chat/completions");
    assert!(config.validate().is_ok());
  }

  #[test]
  fn blank_api_key_is_not_configured() {
    let config = SummarizerConfig::default().with_api_key("   ");
    assert!(!config.has_api_key());

    let config = SummarizerConfig::default().with_api_key("sk-or-test");
    assert!(config.has_api_key());
  }

  #[test]
  fn completions_url_tolerates_trailing_slash() {
    let config = SummarizerConfig::default().with_base_url("http://127.0.0.1:1234/");
    assert_eq!(config.completions_url(), "http://127.0.0.1:1234/chat/completions");
  }

  #[test]
  fn validate_rejects_bad_values() {
    let config = SummarizerConfig::default().with_model(" ");
    assert!(matches!(config.validate(), Err(ConfigError::EmptyModel)));

    let config = SummarizerConfig::default().with_base_url("");
    assert!(matches!(config.validate(), Err(ConfigError::EmptyBaseUrl)));

    let config = SummarizerConfig::default().with_timeout(Duration::ZERO);
    assert!(matches!(config.validate(), Err(ConfigError::ZeroTimeout)));
  }

  #[test]
  fn debug_redacts_api_key() {
    let config = SummarizerConfig::default().with_api_key("sk-or-secret");
    let debug = format!("{config:?}");
    assert!(!debug.contains("sk-or-secret"));
    assert!(debug.contains("<redacted>"));
  }
}
