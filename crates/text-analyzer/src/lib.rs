//! text-analyzer ライブラリー
//!
//! テキストの感情スコアリング（VADER レキシコン）と、
//! OpenRouter の chat-completions API を用いた要約を提供する。

/// 設定モジュール - SummarizerConfig と既定値を定義
pub mod config;

/// エラーモジュール - SummarizeError, TextAnalyzerError 等のエラー型を定義
pub mod errors;

/// データモデルモジュール - SentimentResult, SummaryOutcome 等を定義
pub mod models;

/// 感情分析モジュール - レキシコンベースの極性・主観性スコアリング
pub mod sentiment;

/// 要約モジュール - リモート LLM への要約リクエスト
pub mod summarizer;

/// 再エクスポート
pub use config::SummarizerConfig;
pub use errors::{SummarizeError, TextAnalyzerError, TextAnalyzerResult};
pub use models::{SentimentLabel, SentimentResult, SummaryOutcome};
pub use sentiment::SentimentScorer;
pub use summarizer::{OpenRouterSummarizer, Summarizer};
