//! HTTPハンドラー定義

use axum::{Json, extract::State};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, HealthResponse, ServiceInfo};

use super::state::AppState;

/// POST /analyze エンドポイント
///
/// テキストの感情分析と要約を実行する。
///
/// # Request Body
/// ```json
/// { "text": "解析対象のテキスト" }
/// ```
///
/// # Response
/// - 200 OK: 解析成功（要約に失敗した場合も 200。`summary` が `"Error: ..."` になる）
/// - 400 Bad Request: 入力エラー（空テキスト、空白のみ、5000 文字超過）
/// - 500 Internal Server Error: 内部エラー
pub async fn post_analyze(
  State(state): State<AppState>,
  Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  debug!(text_len = request.text.chars().count(), "解析リクエストを受信");

  request.validate_length()?;

  // 解析を別タスクで実行し、パニックを内部エラーとして切り離す
  let service = state.service.clone();

  let response =
    tokio::spawn(async move { service.analyze(request).await }).await.map_err(|e| {
      error!(error = %e, "解析タスクが異常終了しました");
      ApiError::internal("Analysis failed")
    })??;

  info!(
    label = %response.sentiment.label,
    original_length = response.original_length,
    "解析完了"
  );

  Ok(Json(response))
}

/// ヘルスチェックエンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse::default())
}

/// GET / エンドポイント
///
/// サービス名・バージョン・エンドポイント一覧を返す。
pub async fn service_info() -> Json<ServiceInfo> {
  Json(ServiceInfo::default())
}
