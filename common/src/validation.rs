//! QR操作の入力検証
//!
//! 検証エラーのメッセージはそのまま結果オブジェクトの通知文として使われる。

use crate::error::{Error, Result};

/// エンコード可能なテキストの最大文字数
pub const MAX_TEXT_CHARS: usize = 1000;

/// 認識対象として受け付ける画像の最小辺長（ピクセル）
pub const MIN_DECODE_SIZE: u32 = 50;

/// エンコード対象テキストの検証
pub fn validate_qr_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(Error::Validation(
            "エンコードするテキストが入力されていません".to_string(),
        ));
    }
    if text.chars().count() > MAX_TEXT_CHARS {
        return Err(Error::Validation(format!(
            "テキストが長すぎます（最大{}文字）",
            MAX_TEXT_CHARS
        )));
    }
    Ok(())
}

/// 認識対象画像のサイズ検証
pub fn validate_image_size(width: u32, height: u32) -> Result<()> {
    if width < MIN_DECODE_SIZE || height < MIN_DECODE_SIZE {
        return Err(Error::Validation(format!(
            "画像が小さすぎて認識できません（最小{0}x{0}ピクセル）",
            MIN_DECODE_SIZE
        )));
    }
    Ok(())
}
