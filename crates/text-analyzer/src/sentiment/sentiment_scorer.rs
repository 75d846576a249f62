//! Lexicon-based sentiment scorer
//!
//! Word polarities come from the VADER lexicon (`vader_sentiment`), which already
//! handles negation, intensifiers, capitalisation and punctuation emphasis.
//! This module only maps its scores onto polarity / subjectivity / label.

use std::sync::Arc;

use tracing::trace;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::models::{SentimentLabel, SentimentResult};

/// Raw scores produced by a lexical model.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LexiconScores {
  /// Normalized overall score in `[-1.0, 1.0]`
  pub compound: f64,
  /// Share of positive sentiment mass
  pub positive: f64,
  /// Share of negative sentiment mass
  pub negative: f64,
}

/// Lexical sentiment model.
///
/// Implementations must be total: any string in, scores out.
pub trait LexiconModel: Send + Sync {
  /// Scores a non-empty text.
  fn polarity_scores(&self, text: &str) -> LexiconScores;
}

/// VADER lexicon model
#[derive(Debug, Clone, Copy, Default)]
pub struct VaderLexicon;

impl LexiconModel for VaderLexicon {
  fn polarity_scores(&self, text: &str) -> LexiconScores {
    // The analyzer only holds references to the lazily built lexicon tables.
    let analyzer = SentimentIntensityAnalyzer::new();
    let scores = analyzer.polarity_scores(text);
    let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);

    LexiconScores { compound: get("compound"), positive: get("pos"), negative: get("neg") }
  }
}

/// Sentiment scorer
///
/// - Stateless (only holds the lexical model)
/// - `Clone + Send + Sync`
/// - Never fails
#[derive(Clone)]
pub struct SentimentScorer {
  model: Arc<dyn LexiconModel>,
}

impl Default for SentimentScorer {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Debug for SentimentScorer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("SentimentScorer").finish_non_exhaustive()
  }
}

impl SentimentScorer {
  /// Creates a scorer backed by the VADER lexicon.
  #[must_use]
  pub fn new() -> Self {
    Self::with_model(Arc::new(VaderLexicon))
  }

  /// Creates a scorer backed by an arbitrary lexical model.
  #[must_use]
  pub fn with_model(model: Arc<dyn LexiconModel>) -> Self {
    Self { model }
  }

  /// Scores `text`.
  ///
  /// Empty or whitespace-only text yields [`SentimentResult::NEUTRAL`] without consulting
  /// the model. Otherwise:
  /// - polarity = compound score, clamped to `[-1, 1]`; 0 when no word carries sentiment
  ///   (VADER still emits a compound for bare `!`/`?` emphasis)
  /// - subjectivity = positive + negative share, clamped to `[0, 1]`
  /// - label from the unrounded polarity (see [`SentimentLabel::from_polarity`])
  /// - both numbers rounded to 3 decimals
  pub fn score(&self, text: &str) -> SentimentResult {
    if text.trim().is_empty() {
      return SentimentResult::NEUTRAL;
    }

    let scores = self.model.polarity_scores(text);
    let sentiment_mass = sanitize(scores.positive + scores.negative);
    let polarity =
      if sentiment_mass == 0.0 { 0.0 } else { sanitize(scores.compound).clamp(-1.0, 1.0) };
    let subjectivity = sentiment_mass.clamp(0.0, 1.0);
    let label = SentimentLabel::from_polarity(polarity);

    trace!(polarity, subjectivity, %label, "sentiment scored");

    SentimentResult { label, polarity: round3(polarity), subjectivity: round3(subjectivity) }
  }
}

/// NaN is treated as 0.0
fn sanitize(value: f64) -> f64 {
  if value.is_nan() { 0.0 } else { value }
}

/// Rounds to 3 decimal places.
fn round3(value: f64) -> f64 {
  let rounded = (value * 1000.0).round() / 1000.0;
  // avoid serializing -0.0
  if rounded == 0.0 { 0.0 } else { rounded }
}
