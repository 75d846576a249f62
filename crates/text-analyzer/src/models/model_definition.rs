//! Data model definitions for sentiment scoring and summarization results.

use serde::Serialize;

use crate::errors::SummarizeError;

/// Prefix used on the wire to mark a failed summary.
pub const ERROR_PREFIX: &str = "Error: ";

/// Sentiment label derived from polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
  /// polarity > 0.1
  Positive,
  /// polarity < -0.1
  Negative,
  /// -0.1 <= polarity <= 0.1
  Neutral,
}

impl SentimentLabel {
  /// Threshold beyond which a polarity is no longer neutral (exclusive on both sides).
  pub const THRESHOLD: f64 = 0.1;

  /// Classifies a raw (unrounded) polarity.
  ///
  /// # Examples
  /// - `0.1` → `Neutral`
  /// - `0.1000001` → `Positive`
  /// - `-0.1000001` → `Negative`
  #[must_use]
  pub fn from_polarity(polarity: f64) -> Self {
    if polarity > Self::THRESHOLD {
      Self::Positive
    } else if polarity < -Self::THRESHOLD {
      Self::Negative
    } else {
      Self::Neutral
    }
  }

  /// Lowercase name, as serialized.
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Positive => "positive",
      Self::Negative => "negative",
      Self::Neutral => "neutral",
    }
  }
}

impl std::fmt::Display for SentimentLabel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Sentiment of a text: label plus polarity and subjectivity rounded to 3 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
  /// Label derived from the unrounded polarity
  pub label: SentimentLabel,
  /// Signed intensity in `[-1.0, 1.0]`
  pub polarity: f64,
  /// Opinion (1.0) vs. fact (0.0), in `[0.0, 1.0]`
  pub subjectivity: f64,
}

impl SentimentResult {
  /// Result for empty or whitespace-only text.
  pub const NEUTRAL: Self =
    Self { label: SentimentLabel::Neutral, polarity: 0.0, subjectivity: 0.0 };
}

/// Outcome of one summarization attempt. Exactly one of summary or failure.
#[derive(Debug, Clone)]
pub enum SummaryOutcome {
  /// Summary text, trimmed
  Summary(String),
  /// Reason the summary could not be produced
  Failure(SummarizeError),
}

impl SummaryOutcome {
  /// Whether a summary was produced.
  pub fn is_success(&self) -> bool {
    matches!(self, Self::Summary(_))
  }

  /// Summary text, if any.
  pub fn summary(&self) -> Option<&str> {
    match self {
      Self::Summary(summary) => Some(summary),
      Self::Failure(_) => None,
    }
  }

  /// Failure reason, if any.
  pub fn failure(&self) -> Option<&SummarizeError> {
    match self {
      Self::Summary(_) => None,
      Self::Failure(err) => Some(err),
    }
  }

  /// Flattens the outcome into the wire string: the summary itself, or `"Error: {reason}"`.
  #[must_use]
  pub fn into_wire_string(self) -> String {
    match self {
      Self::Summary(summary) => summary,
      Self::Failure(err) => format!("{ERROR_PREFIX}{err}"),
    }
  }
}

impl From<Result<String, SummarizeError>> for SummaryOutcome {
  fn from(result: Result<String, SummarizeError>) -> Self {
    match result {
      Ok(summary) => Self::Summary(summary),
      Err(err) => Self::Failure(err),
    }
  }
}
