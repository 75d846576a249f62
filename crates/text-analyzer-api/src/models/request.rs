//! リクエストモデル定義

use serde::Deserialize;

use crate::config::{MAX_TEXT_LENGTH, MIN_TEXT_LENGTH};
use crate::errors::{ApiError, Result};

/// テキスト解析リクエスト
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
  /// 解析対象のテキスト（1〜5000 文字）
  pub text: String,
}

impl AnalyzeRequest {
  /// 文字数の境界を検証する（トリム前の値で判定）
  ///
  /// # Errors
  /// - 空文字列: `invalid_input`
  /// - 5000 文字超過: `text_too_long`
  pub fn validate_length(&self) -> Result<()> {
    let chars = self.text.chars().count();
    if chars < MIN_TEXT_LENGTH {
      return Err(ApiError::invalid_input(format!(
        "Text must be at least {MIN_TEXT_LENGTH} character long"
      )));
    }
    if chars > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(chars, MAX_TEXT_LENGTH));
    }
    Ok(())
  }
}
