//! Service module

mod analyzer_api_service;

pub use analyzer_api_service::{AnalyzerApiService, AnalyzerApiServiceFull};
