//! text-analyzer-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use text_analyzer_api::ApiError;
use text_analyzer_api::api::AppState;
use text_analyzer_api::api::run_server;
use text_analyzer_api::config::Config;
use text_analyzer_api::service::AnalyzerApiServiceFull;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // .env があれば読み込む（無くてもよい）
  let dotenv = dotenvy::dotenv();

  // ロギングの初期化
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  if let Ok(path) = dotenv {
    tracing::debug!(path = %path.display(), ".env を読み込みました");
  }

  // 設定の読み込み
  let config = Config::from_env()?;
  tracing::info!(
    model = %config.summarizer.model,
    api_key_configured = config.summarizer.has_api_key(),
    "設定を読み込みました"
  );
  if !config.summarizer.has_api_key() {
    tracing::warn!("OPENROUTER_API_KEY が未設定のため、要約は常にエラーになります");
  }

  // サービスの初期化
  let service = Arc::new(AnalyzerApiServiceFull::new(&config)?);
  tracing::info!("テキスト解析サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
