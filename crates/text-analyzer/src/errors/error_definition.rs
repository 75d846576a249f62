//! エラー定義

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

/// 要約設定（SummarizerConfig）関連のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ConfigError {
  /// model が空
  #[error("model identifier must not be empty")]
  EmptyModel,

  /// base_url が空
  #[error("OpenRouter base URL must not be empty")]
  EmptyBaseUrl,

  /// timeout が 0
  #[error("request timeout must be greater than zero")]
  ZeroTimeout,
}

/// HTTP クライアント構築時のエラー
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum ClientError {
  /// reqwest::Client の構築に失敗（TLS バックエンド初期化失敗等）
  #[error("failed to build HTTP client: {0}")]
  Build(Arc<reqwest::Error>),
}

/// 要約処理の失敗理由
///
/// `Display` は `"Error: "` プレフィックスを含まない。
/// ワイヤ形式への変換は [`crate::SummaryOutcome::into_wire_string`] が担う。
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum SummarizeError {
  /// API キー未設定（ネットワーク呼び出しなし）
  #[error("OpenRouter API key not configured")]
  MissingApiKey,

  /// 空テキスト（ネットワーク呼び出しなし）
  #[error("Empty text provided")]
  EmptyText,

  /// 2xx 以外のステータス。レスポンスボディは破棄する
  #[error("HTTP {0}")]
  HttpStatus(u16),

  /// `choices` が存在しない、または空
  #[error("No response from LLM")]
  NoResponse,

  /// タイムアウト
  #[error("request timed out after {0:?}")]
  Timeout(Duration),

  /// 送信・接続等のトランスポートエラー
  #[error("{0}")]
  Request(Arc<reqwest::Error>),

  /// レスポンスボディの JSON が不正、または想定外の形
  #[error("invalid response from LLM: {0}")]
  Decode(String),
}

impl SummarizeError {
  /// reqwest のエラーを分類する
  ///
  /// タイムアウトは `Timeout`、ボディのデコード失敗は `Decode`、それ以外は `Request`。
  #[must_use]
  pub fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
    if err.is_timeout() {
      Self::Timeout(timeout)
    } else if err.is_decode() {
      Self::Decode(err.to_string())
    } else {
      Self::Request(Arc::new(err))
    }
  }

  /// ネットワーク呼び出し前に短絡したかどうか
  #[must_use]
  pub fn is_guard(&self) -> bool {
    matches!(self, Self::MissingApiKey | Self::EmptyText)
  }
}

/// 統合エラー
/// 本クレートの外部に公開するエラー用 API はこのエラーを返すこと
/// `TextAnalyzerResult<T>` = `Result<T, TextAnalyzerError>` として使用する
#[derive(Debug, Error, Clone)]
#[non_exhaustive]
pub enum TextAnalyzerError {
  /// 設定エラー
  #[error(transparent)]
  Config(#[from] ConfigError),

  /// HTTP クライアントエラー
  #[error(transparent)]
  Client(#[from] ClientError),
}

/// text-analyzer クレートの標準 Result 型エイリアス
pub type TextAnalyzerResult<T> = Result<T, TextAnalyzerError>;
