//! OpenRouter chat-completions client
//!
//! One summary = one POST to `{base_url}/chat/completions`. No retries.
//! Every failure path resolves to [`SummaryOutcome::Failure`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::redirect::Policy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{MAX_SUMMARY_TOKENS, SUMMARY_TEMPERATURE, SummarizerConfig};
use crate::errors::{ClientError, SummarizeError, TextAnalyzerResult};
use crate::models::SummaryOutcome;

use super::Summarizer;

/// Instruction placed in front of the text in the user message.
pub const SUMMARY_INSTRUCTION: &str = "Summarize the following text in 1-2 concise sentences:\n\n";

/// Request body of the chat-completions endpoint
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
  model: &'a str,
  messages: Vec<ChatMessage>,
  max_tokens: u32,
  temperature: f64,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
  role: &'static str,
  content: String,
}

/// Only the fields we read; everything else the provider sends is ignored.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
  #[serde(default)]
  choices: Option<Vec<Choice>>,
}

#[derive(Debug, Deserialize)]
struct Choice {
  message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
  #[serde(default)]
  content: Option<String>,
}

/// Summarizer backed by the OpenRouter API
///
/// Holds one `reqwest::Client` (connection pool) for the life of the process.
/// Cloning is cheap and shares the pool.
#[derive(Debug, Clone)]
pub struct OpenRouterSummarizer {
  http: Client,
  config: Arc<SummarizerConfig>,
  url: String,
}

impl OpenRouterSummarizer {
  /// Creates the client
  ///
  /// # Arguments
  /// * `config` - Summarizer configuration (API key may be absent)
  ///
  /// # Errors
  /// - Configuration values are invalid
  /// - The HTTP client cannot be built
  pub fn new(config: SummarizerConfig) -> TextAnalyzerResult<Self> {
    config.validate()?;

    // A redirect is reported as `HTTP 3xx`, never followed with a second POST.
    let http = Client::builder()
      .timeout(config.timeout)
      .redirect(Policy::none())
      .build()
      .map_err(|e| ClientError::Build(Arc::new(e)))?;
    let url = config.completions_url();

    Ok(Self { http, config: Arc::new(config), url })
  }

  /// Builds the request body for `text`.
  fn build_request<'a>(&'a self, text: &str) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
      model: &self.config.model,
      messages: vec![ChatMessage { role: "user", content: format!("{SUMMARY_INSTRUCTION}{text}") }],
      max_tokens: MAX_SUMMARY_TOKENS,
      temperature: SUMMARY_TEMPERATURE,
    }
  }

  /// Runs the guards and the outbound call.
  async fn try_summarize(&self, text: &str) -> Result<String, SummarizeError> {
    let api_key = self.config.api_key.as_deref().ok_or(SummarizeError::MissingApiKey)?;

    if text.trim().is_empty() {
      return Err(SummarizeError::EmptyText);
    }

    let timeout = self.config.timeout;
    let body = self.build_request(text);

    debug!(model = %self.config.model, text_len = text.chars().count(), "sending summary request");

    let response = self
      .http
      .post(&self.url)
      .bearer_auth(api_key)
      .header("HTTP-Referer", &self.config.referer)
      .header("X-Title", &self.config.app_title)
      .json(&body)
      .send()
      .await
      .map_err(|e| SummarizeError::from_reqwest(e, timeout))?;

    let status = response.status();
    if !status.is_success() {
      debug!(status = status.as_u16(), "summary request rejected");
      return Err(SummarizeError::HttpStatus(status.as_u16()));
    }

    let bytes = response.bytes().await.map_err(|e| SummarizeError::from_reqwest(e, timeout))?;
    parse_completion(&bytes)
  }
}

/// Extracts the first choice's content from a 2xx response body.
fn parse_completion(bytes: &[u8]) -> Result<String, SummarizeError> {
  let parsed: ChatCompletionResponse =
    serde_json::from_slice(bytes).map_err(|e| SummarizeError::Decode(e.to_string()))?;

  let first = parsed
    .choices
    .unwrap_or_default()
    .into_iter()
    .next()
    .ok_or(SummarizeError::NoResponse)?;

  first
    .message
    .content
    .map(|content| content.trim().to_string())
    .ok_or_else(|| SummarizeError::Decode("message content is missing".to_string()))
}

#[async_trait]
impl Summarizer for OpenRouterSummarizer {
  async fn summarize(&self, text: &str) -> SummaryOutcome {
    self.try_summarize(text).await.into()
  }
}
