//! API統合テスト
//!
//! Router 経由で HTTP エンドポイントの振る舞いを検証する。
//! 要約 API は mockito のモックサーバーで代替するため、ネットワーク不要。

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
  Router,
  body::Body,
  http::{Request, StatusCode},
};
use mockito::{Matcher, Server, ServerGuard};
use tower::ServiceExt;

use text_analyzer::SummarizerConfig;
use text_analyzer_api::{
  api::{AppState, create_router},
  config::{Config, MAX_TEXT_LENGTH},
  errors::Result as ApiResult,
  models::{AnalyzeRequest, AnalyzeResponse},
  service::{AnalyzerApiService, AnalyzerApiServiceFull},
};

/// モックサーバーを要約 API として使う本番サービスで Router を構築する
fn app_with_provider(server: &ServerGuard) -> Router {
  let config = Config {
    bind_addr: "127.0.0.1:0".to_string(),
    summarizer: SummarizerConfig::default().with_api_key("sk-or-test").with_base_url(server.url()),
  };
  let service = AnalyzerApiServiceFull::new(&config).expect("service should build");
  create_router(AppState::new(config, Arc::new(service)))
}

/// 常にパニックするスタブ（内部エラー経路の検証用）
struct PanickingService;

#[async_trait]
impl AnalyzerApiService for PanickingService {
  async fn analyze(&self, _request: AnalyzeRequest) -> ApiResult<AnalyzeResponse> {
    panic!("orchestrator defect");
  }
}

fn post_json(uri: &str, body: String) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(body))
    .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  serde_json::from_slice(&body_bytes).expect("body should be valid json")
}

async fn mock_summary(server: &mut ServerGuard, content: &str) -> mockito::Mock {
  server
    .mock("POST", "/chat/completions")
    .with_status(200)
    .with_header("content-type", "application/json")
    .with_body(
      serde_json::json!({ "choices": [{ "message": { "content": content } }] }).to_string(),
    )
    .create_async()
    .await
}

// ============================================================================
// 正常系テスト
// ============================================================================

#[tokio::test]
async fn health_check_returns_healthy() {
  let server = Server::new_async().await;
  let app = app_with_provider(&server);

  let response = app
    .oneshot(Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap())
    .await
    .expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);
  let json = body_json(response).await;
  assert_eq!(json["status"], "healthy");
  assert_eq!(json["service"], "ai-text-analyzer");
}

#[tokio::test]
async fn analyze_positive_text_end_to_end() {
  let mut server = Server::new_async().await;
  let mock = mock_summary(&mut server, "  The customer is happy with the product.  ").await;
  let app = app_with_provider(&server);

  let text = "I love this product, it works great!";
  let payload = serde_json::json!({ "text": text });

  let response =
    app.oneshot(post_json("/analyze", payload.to_string())).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);
  let json = body_json(response).await;

  assert_eq!(json["sentiment"]["label"], "positive");
  assert!(json["sentiment"]["polarity"].as_f64().unwrap() > 0.1);
  assert!(json["sentiment"]["subjectivity"].is_number());
  assert_eq!(json["original_length"], text.chars().count());
  assert_eq!(json["summary"], "The customer is happy with the product.");
  mock.assert_async().await;
}

#[tokio::test]
async fn analyze_trims_before_summarizing() {
  let mut server = Server::new_async().await;
  let mock = server
    .mock("POST", "/chat/completions")
    .match_body(Matcher::Regex(r"sentences:\\n\\nplain words\x22".to_string()))
    .with_status(200)
    .with_body(r#"{"choices":[{"message":{"content":"ok"}}]}"#)
    .create_async()
    .await;
  let app = app_with_provider(&server);

  let payload = serde_json::json!({ "text": "   plain words \n" });
  let response = app.oneshot(post_json("/analyze", payload.to_string())).await.unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let json = body_json(response).await;
  assert_eq!(json["original_length"], 11);
  assert_eq!(json["summary"], "ok");
  mock.assert_async().await;
}

// ============================================================================
// 要約失敗時の劣化応答（200 のまま）
// ============================================================================

#[tokio::test]
async fn provider_error_degrades_summary() {
  let mut server = Server::new_async().await;
  let _mock = server.mock("POST", "/chat/completions").with_status(500).create_async().await;
  let app = app_with_provider(&server);

  let payload = serde_json::json!({ "text": "The service was terrible." });
  let response = app.oneshot(post_json("/analyze", payload.to_string())).await.unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let json = body_json(response).await;
  assert_eq!(json["summary"], "Error: HTTP 500");
  assert_eq!(json["sentiment"]["label"], "negative");
}

#[tokio::test]
async fn missing_api_key_degrades_summary() {
  let mut server = Server::new_async().await;
  let mock = server.mock("POST", Matcher::Any).expect(0).create_async().await;

  let config = Config {
    bind_addr: "127.0.0.1:0".to_string(),
    summarizer: SummarizerConfig::default().with_base_url(server.url()),
  };
  let service = AnalyzerApiServiceFull::new(&config).unwrap();
  let app = create_router(AppState::new(config, Arc::new(service)));

  let payload = serde_json::json!({ "text": "Nice weather today." });
  let response = app.oneshot(post_json("/analyze", payload.to_string())).await.unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let json = body_json(response).await;
  assert_eq!(json["summary"], "Error: OpenRouter API key not configured");
  mock.assert_async().await;
}

// ============================================================================
// 異常系テスト（入力エラー）
// ============================================================================

#[tokio::test]
async fn whitespace_only_returns_400_without_summary_call() {
  let mut server = Server::new_async().await;
  let mock = server.mock("POST", Matcher::Any).expect(0).create_async().await;
  let app = app_with_provider(&server);

  let payload = serde_json::json!({ "text": "   " });
  let response = app.oneshot(post_json("/analyze", payload.to_string())).await.unwrap();

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let json = body_json(response).await;
  assert_eq!(json["error"]["code"], "invalid_input");
  assert_eq!(json["error"]["message"], "Text cannot be empty");
  mock.assert_async().await;
}

#[tokio::test]
async fn empty_text_returns_400() {
  let server = Server::new_async().await;
  let app = app_with_provider(&server);

  let payload = serde_json::json!({ "text": "" });
  let response = app.oneshot(post_json("/analyze", payload.to_string())).await.unwrap();

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(response).await["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn too_long_text_returns_400() {
  let mut server = Server::new_async().await;
  let mock = server.mock("POST", Matcher::Any).expect(0).create_async().await;
  let app = app_with_provider(&server);

  let payload = serde_json::json!({ "text": "a".repeat(MAX_TEXT_LENGTH + 1) });
  let response = app.oneshot(post_json("/analyze", payload.to_string())).await.unwrap();

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(response).await["error"]["code"], "text_too_long");
  mock.assert_async().await;
}

// ============================================================================
// JSON パースエラーテスト（Axum 側）
// ============================================================================

#[tokio::test]
async fn invalid_json_returns_client_error() {
  let server = Server::new_async().await;
  let app = app_with_provider(&server);

  let response = app.oneshot(post_json("/analyze", "{ invalid json".to_string())).await.unwrap();

  // Axum の Json extractor が返すステータス（400 or 422 等）を許容
  assert!(response.status().is_client_error(), "expected 4xx, got: {}", response.status());
}

#[tokio::test]
async fn missing_text_field_returns_client_error() {
  let server = Server::new_async().await;
  let app = app_with_provider(&server);

  let payload = serde_json::json!({ "foo": "bar" });
  let response = app.oneshot(post_json("/analyze", payload.to_string())).await.unwrap();

  assert!(response.status().is_client_error(), "expected 4xx, got: {}", response.status());
}

// ============================================================================
// 内部エラー
// ============================================================================

#[tokio::test]
async fn orchestrator_panic_returns_500() {
  let config =
    Config { bind_addr: "127.0.0.1:0".to_string(), summarizer: SummarizerConfig::default() };
  let app = create_router(AppState::new(config, Arc::new(PanickingService)));

  let payload = serde_json::json!({ "text": "anything" });
  let response = app.oneshot(post_json("/analyze", payload.to_string())).await.unwrap();

  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let json = body_json(response).await;
  assert_eq!(json["error"]["code"], "internal_error");
  assert_eq!(json["error"]["message"], "Analysis failed");
}
