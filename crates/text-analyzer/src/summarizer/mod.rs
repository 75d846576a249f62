//! Summarization via a remote chat-completions API

pub mod openrouter_client;

use async_trait::async_trait;

use crate::models::SummaryOutcome;

pub use openrouter_client::{OpenRouterSummarizer, SUMMARY_INSTRUCTION};

/// Common interface for summarization backends
///
/// This trait allows swapping the production implementation (`OpenRouterSummarizer`)
/// with test stubs/mocks.
#[async_trait]
pub trait Summarizer: Send + Sync {
  /// Summarizes `text`.
  ///
  /// Never fails: every failure is folded into [`SummaryOutcome::Failure`].
  async fn summarize(&self, text: &str) -> SummaryOutcome;
}
