//! text-analyzer-api crate
//!
//! Web server providing sentiment analysis and LLM summarization as HTTP API.
//!
//! ## Endpoints
//! - `POST /analyze` - Sentiment + Summary
//! - `GET /health` - Health Check
//! - `GET /` - Service descriptor
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "I love this product, it works great!"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse};
pub use service::AnalyzerApiServiceFull;
