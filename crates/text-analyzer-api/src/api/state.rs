//! API State Definition

use std::sync::Arc;

use crate::config::Config;
use crate::service::AnalyzerApiService;

/// Application State
///
/// State shared across the entire server.
/// Contains configuration and service; both are read-only after startup.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Config,
  /// Text Analysis Service
  ///
  /// - Production: `Arc::new(AnalyzerApiServiceFull::new(&config)?)`
  /// - Test: `Arc::new(StubAnalyzerApiService)`
  pub service: Arc<dyn AnalyzerApiService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn AnalyzerApiService>) -> Self {
    Self { config, service }
  }
}
