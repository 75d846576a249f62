//! モデルモジュール

mod request;
mod response;

pub use request::AnalyzeRequest;
pub use response::{AnalyzeResponse, HealthResponse, ServiceInfo};
