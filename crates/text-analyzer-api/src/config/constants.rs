//! API設定の定数定義

/// 入力テキストの最大長（文字数）
///
/// 5000 文字までのテキストを許可する。
/// LLM へのプロンプトが過大にならないための制限。
pub const MAX_TEXT_LENGTH: usize = 5000;

/// 入力テキストの最小長（文字数、トリム前）
pub const MIN_TEXT_LENGTH: usize = 1;

/// デフォルトのバインドアドレス
///
/// 全インターフェースの 8000 番ポート。
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// サービス名（ヘルスチェック応答に含める）
pub const SERVICE_NAME: &str = "ai-text-analyzer";

/// API のバージョン
pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
