//! Response Model Definition

use std::collections::BTreeMap;

use serde::Serialize;
use text_analyzer::SentimentResult;

use crate::config::{API_VERSION, SERVICE_NAME};

/// Text Analysis Response
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeResponse {
  /// Sentiment of the trimmed text
  pub sentiment: SentimentResult,
  /// Summary text, or `"Error: ..."` when summarization failed
  pub summary: String,
  /// Character count of the trimmed text
  pub original_length: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  /// Always "healthy" while the process serves requests
  pub status: &'static str,
  /// Service name
  pub service: &'static str,
}

impl Default for HealthResponse {
  fn default() -> Self {
    Self { status: "healthy", service: SERVICE_NAME }
  }
}

/// Service descriptor returned by `GET /`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
  /// Human-readable title
  pub message: &'static str,
  /// API version
  pub version: &'static str,
  /// Endpoint name → "path (METHOD)"
  pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl Default for ServiceInfo {
  fn default() -> Self {
    let endpoints =
      BTreeMap::from([("analyze", "/analyze (POST)"), ("health", "/health (GET)")]);
    Self { message: "AI Text Analyzer API", version: API_VERSION, endpoints }
  }
}
