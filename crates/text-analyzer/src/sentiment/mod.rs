//! Sentiment scoring

pub mod sentiment_scorer;

pub use sentiment_scorer::{LexiconModel, LexiconScores, SentimentScorer, VaderLexicon};
