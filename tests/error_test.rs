//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use qrbox_rust::error::QrBoxError;

/// QrBoxErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        QrBoxError::Config("テスト設定エラー".to_string()),
        QrBoxError::FileNotFound("test.png".to_string()),
        QrBoxError::ImageLoad("読み込み失敗".to_string()),
        QrBoxError::Encode("データが大きすぎる".to_string()),
        QrBoxError::Decode("QRコードが見つかりません".to_string()),
        QrBoxError::ImageSave("保存失敗".to_string()),
        QrBoxError::Prompt("入力失敗".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 段階メッセージと元メッセージが「<段階>: <元>」の形で連結される
#[test]
fn test_error_wraps_stage_and_cause() {
    let err = QrBoxError::Encode("version too large".to_string());
    assert_eq!(format!("{}", err), "QRコード生成エラー: version too large");

    let err = QrBoxError::Decode("data ecc failure".to_string());
    assert_eq!(format!("{}", err), "QRコード認識エラー: data ecc failure");

    let err = QrBoxError::FileNotFound("qr.png".to_string());
    assert_eq!(format!("{}", err), "ファイルが見つかりません: qr.png");
}

/// エラーのDebug実装確認
#[test]
fn test_error_debug() {
    let err = QrBoxError::Config("テスト".to_string());
    let debug = format!("{:?}", err);

    assert!(debug.contains("Config"));
    assert!(debug.contains("テスト"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: QrBoxError = io_err.into();

    assert!(matches!(err, QrBoxError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: QrBoxError = json_err.into();

    assert!(matches!(err, QrBoxError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = qrbox_common::Error::Validation("テキストが入力されていません".to_string());
    let err: QrBoxError = common_err.into();

    assert!(matches!(err, QrBoxError::Common(_)));

    // 透過的エラーなので検証メッセージがそのまま表示される
    let display = format!("{}", err);
    assert_eq!(display, "テキストが入力されていません");
}
