//! Text Analysis Service
//!
//! Orchestrates one analysis: trim → sentiment (sync) → summary (async) → merge.
//! Summarization failures never fail the request; they end up in `summary`.

use std::sync::Arc;

use async_trait::async_trait;
use text_analyzer::{OpenRouterSummarizer, SentimentScorer, Summarizer, SummaryOutcome};
use tracing::{info, warn};

use crate::config::Config;
use crate::errors::{ApiError, Result};
use crate::models::{AnalyzeRequest, AnalyzeResponse};

/// Common interface for the text analysis service
///
/// This trait allows swapping production implementation (`AnalyzerApiServiceFull`) with
/// test stubs/mocks.
#[async_trait]
pub trait AnalyzerApiService: Send + Sync {
  /// Executes sentiment analysis and summarization
  ///
  /// # Errors
  /// - Input error (empty after trimming)
  /// - Internal error
  async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;
}

/// Text Analysis Service
///
/// Holds only read-only collaborators; one instance serves all requests concurrently.
#[derive(Clone)]
pub struct AnalyzerApiServiceFull {
  scorer: SentimentScorer,
  summarizer: Arc<dyn Summarizer>,
}

impl AnalyzerApiServiceFull {
  /// Initializes the service
  ///
  /// # Arguments
  /// * `config` - Configuration (including OpenRouter settings)
  ///
  /// # Errors
  /// Returns an error if the HTTP client cannot be built
  pub fn new(config: &Config) -> Result<Self> {
    let summarizer = OpenRouterSummarizer::new(config.summarizer.clone())?;
    Ok(Self::from_parts(SentimentScorer::new(), Arc::new(summarizer)))
  }

  /// Assembles the service from already built collaborators
  #[must_use]
  pub fn from_parts(scorer: SentimentScorer, summarizer: Arc<dyn Summarizer>) -> Self {
    Self { scorer, summarizer }
  }

  /// Executes the analysis
  ///
  /// # Arguments
  /// * `request` - Analysis request (length bounds already checked at the boundary)
  ///
  /// # Errors
  /// - If text is empty or whitespace only
  pub async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    let text = request.text.trim();
    if text.is_empty() {
      return Err(ApiError::invalid_input("Text cannot be empty"));
    }

    let original_length = text.chars().count();
    info!(text_len = original_length, "analyzing text");

    let sentiment = self.scorer.score(text);
    info!(label = %sentiment.label, "sentiment scored");

    let outcome = self.summarizer.summarize(text).await;
    match &outcome {
      SummaryOutcome::Summary(_) => info!("summary generated"),
      SummaryOutcome::Failure(err) if err.is_guard() => info!(reason = %err, "summary skipped"),
      SummaryOutcome::Failure(err) => warn!(error = %err, "summarization failed"),
    }

    Ok(AnalyzeResponse { sentiment, summary: outcome.into_wire_string(), original_length })
  }
}

/// Production implementation of trait `AnalyzerApiService`
#[async_trait]
impl AnalyzerApiService for AnalyzerApiServiceFull {
  async fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    // Note: Writing `self.analyze(...)` would recursively call the trait method,
    // so explicitly call the inherent method.
    AnalyzerApiServiceFull::analyze(self, request).await
  }
}

#[cfg(test)]
mod tests {
  use std::sync::Mutex;

  use text_analyzer::SentimentLabel;
  use text_analyzer::errors::SummarizeError;

  use super::*;

  /// Records every text it receives and replays a fixed outcome.
  struct RecordingSummarizer {
    outcome: SummaryOutcome,
    seen: Mutex<Vec<String>>,
  }

  impl RecordingSummarizer {
    fn new(outcome: SummaryOutcome) -> Arc<Self> {
      Arc::new(Self { outcome, seen: Mutex::new(Vec::new()) })
    }

    fn seen(&self) -> Vec<String> {
      self.seen.lock().unwrap().clone()
    }
  }

  #[async_trait]
  impl Summarizer for RecordingSummarizer {
    async fn summarize(&self, text: &str) -> SummaryOutcome {
      self.seen.lock().unwrap().push(text.to_string());
      self.outcome.clone()
    }
  }

  fn service_with(summarizer: Arc<RecordingSummarizer>) -> AnalyzerApiServiceFull {
    AnalyzerApiServiceFull::from_parts(SentimentScorer::new(), summarizer)
  }

  fn request(text: &str) -> AnalyzeRequest {
    AnalyzeRequest { text: text.to_string() }
  }

  #[tokio::test]
  async fn positive_text_end_to_end() {
    let summarizer =
      RecordingSummarizer::new(SummaryOutcome::Summary("A happy customer.".to_string()));
    let service = service_with(summarizer.clone());

    let text = "I love this product, it works great!";
    let response = service.analyze(request(text)).await.unwrap();

    assert_eq!(response.sentiment.label, SentimentLabel::Positive);
    assert_eq!(response.original_length, text.chars().count());
    assert_eq!(response.summary, "A happy customer.");
    assert_eq!(summarizer.seen(), vec![text.to_string()]);
  }

  #[tokio::test]
  async fn whitespace_only_is_rejected_before_downstream_calls() {
    let summarizer = RecordingSummarizer::new(SummaryOutcome::Summary("unused".to_string()));
    let service = service_with(summarizer.clone());

    let err = service.analyze(request("   ")).await.unwrap_err();

    assert_eq!(err.code(), "invalid_input");
    assert_eq!(err.to_string(), "Text cannot be empty");
    assert!(summarizer.seen().is_empty());
  }

  #[tokio::test]
  async fn trimmed_text_feeds_both_components_and_length() {
    let summarizer = RecordingSummarizer::new(SummaryOutcome::Summary("ok".to_string()));
    let service = service_with(summarizer.clone());

    let response = service.analyze(request("  \n héllo wörld \t")).await.unwrap();

    assert_eq!(summarizer.seen(), vec!["héllo wörld".to_string()]);
    assert_eq!(response.original_length, 11);
  }

  #[tokio::test]
  async fn summarization_failure_degrades_response() {
    let summarizer =
      RecordingSummarizer::new(SummaryOutcome::Failure(SummarizeError::HttpStatus(500)));
    let service = service_with(summarizer);

    let response = service.analyze(request("This is awful and I hate it.")).await.unwrap();

    assert_eq!(response.summary, "Error: HTTP 500");
    assert_eq!(response.sentiment.label, SentimentLabel::Negative);
  }

  #[tokio::test]
  async fn skipped_summary_is_still_reported() {
    let summarizer = RecordingSummarizer::new(SummaryOutcome::Failure(SummarizeError::EmptyText));
    let service = service_with(summarizer.clone());

    let response = service.analyze(request("fine")).await.unwrap();

    assert_eq!(response.summary, "Error: Empty text provided");
    assert_eq!(summarizer.seen(), vec!["fine".to_string()]);
  }

  #[tokio::test]
  async fn missing_api_key_still_scores_sentiment() {
    let config = Config {
      bind_addr: "127.0.0.1:0".to_string(),
      summarizer: text_analyzer::SummarizerConfig::default(),
    };
    let service = AnalyzerApiServiceFull::new(&config).unwrap();

    let response = service.analyze(request("What a wonderful day")).await.unwrap();

    assert_eq!(response.summary, "Error: OpenRouter API key not configured");
    assert_eq!(response.sentiment.label, SentimentLabel::Positive);
    assert_eq!(response.original_length, 20);
  }
}
