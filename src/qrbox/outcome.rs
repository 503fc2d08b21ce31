use image::DynamicImage;

/// QR操作の統一結果
///
/// 成功/失敗のフラグとユーザー向けメッセージ、成功時のペイロード
/// （生成画像・認識テキスト）を持つ。ファサードの公開APIはエラーを
/// 送出せず、常にこの型で返す。`image`と`decoded_text`は
/// `success`が真のときだけ意味を持つ。
#[derive(Debug, Clone, Default)]
pub struct QrOutcome {
    pub success: bool,
    pub message: String,
    pub image: Option<DynamicImage>,
    pub decoded_text: Option<String>,
}

impl QrOutcome {
    /// 成功結果
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            ..Default::default()
        }
    }

    /// 失敗結果
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            ..Default::default()
        }
    }

    /// 生成画像を添付
    pub fn with_image(mut self, image: DynamicImage) -> Self {
        self.image = Some(image);
        self
    }

    /// 認識テキストを添付
    pub fn with_decoded_text(mut self, text: impl Into<String>) -> Self {
        self.decoded_text = Some(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_has_no_payload_by_default() {
        let outcome = QrOutcome::success("生成しました");
        assert!(outcome.success);
        assert_eq!(outcome.message, "生成しました");
        assert!(outcome.image.is_none());
        assert!(outcome.decoded_text.is_none());
    }

    #[test]
    fn test_failure_carries_message() {
        let outcome = QrOutcome::failure("テキストが入力されていません");
        assert!(!outcome.success);
        assert_eq!(outcome.message, "テキストが入力されていません");
    }

    #[test]
    fn test_with_decoded_text() {
        let outcome = QrOutcome::success("認識しました").with_decoded_text("hello");
        assert_eq!(outcome.decoded_text.as_deref(), Some("hello"));
    }
}
