//! QRファサードの統合テスト
//!
//! 生成→認識の往復とファイル入出力、検証エラーの通知文を検証

use qrbox_common::format::OutputFormat;
use qrbox_rust::qrbox::QrCodeBox;
use std::path::Path;
use tempfile::tempdir;

/// 生成した画像をそのまま認識すると元のテキストに戻る
#[test]
fn test_encode_decode_round_trip() {
    let qr_box = QrCodeBox::default();

    let generated = qr_box.generate_from_text("hello qrbox");
    assert!(generated.success, "{}", generated.message);

    let image = generated.image.expect("生成画像がない");
    let decoded = qr_box.decode_from_image(&image);

    assert!(decoded.success, "{}", decoded.message);
    assert_eq!(decoded.decoded_text.as_deref(), Some("hello qrbox"));
}

/// スキームのないURLはhttps://を補完してエンコードされる
#[test]
fn test_url_gets_https_scheme() {
    let qr_box = QrCodeBox::default();

    let generated = qr_box.generate_for_url("example.com");
    assert!(generated.success, "{}", generated.message);

    let image = generated.image.expect("生成画像がない");
    let decoded = qr_box.decode_from_image(&image);

    assert_eq!(decoded.decoded_text.as_deref(), Some("https://example.com"));
}

/// スキームつきURLはそのままエンコードされる
#[test]
fn test_url_with_scheme_is_unchanged() {
    let qr_box = QrCodeBox::default();

    let generated = qr_box.generate_for_url("http://example.com");
    let image = generated.image.expect("生成画像がない");
    let decoded = qr_box.decode_from_image(&image);

    assert_eq!(decoded.decoded_text.as_deref(), Some("http://example.com"));
}

/// 連絡先はvCard形式でエンコードされる
#[test]
fn test_contact_encodes_vcard() {
    let qr_box = QrCodeBox::default();

    let generated = qr_box.generate_for_contact("Taro Yamada", "090-0000-0000", "taro@example.com");
    assert!(generated.success, "{}", generated.message);

    let image = generated.image.expect("生成画像がない");
    let decoded = qr_box.decode_from_image(&image);
    let text = decoded.decoded_text.expect("認識テキストがない");

    assert!(text.starts_with("BEGIN:VCARD"));
    assert!(text.contains("FN:Taro Yamada"));
    assert!(text.contains("TEL:090-0000-0000"));
    assert!(text.contains("EMAIL:taro@example.com"));
    assert!(text.ends_with("END:VCARD"));
}

/// 保存→ファイル読み込み→認識の一連の流れ
#[test]
fn test_save_and_decode_from_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let qr_box = QrCodeBox::default();

    let generated = qr_box.generate_from_text("file round trip");
    let image = generated.image.expect("生成画像がない");

    // 拡張子なしのパス → .pngが補完される
    let saved = qr_box.save_image_to_file(&image, &dir.path().join("qr"), OutputFormat::Png);
    assert!(saved.success, "{}", saved.message);
    assert!(saved.message.contains("qr.png"));

    let saved_path = dir.path().join("qr.png");
    assert!(saved_path.exists());

    let decoded = qr_box.decode_from_file(&saved_path);
    assert!(decoded.success, "{}", decoded.message);
    assert_eq!(decoded.decoded_text.as_deref(), Some("file round trip"));
    assert!(decoded.image.is_some());
}

/// BMP形式でも保存できる
#[test]
fn test_save_as_bmp() {
    let dir = tempdir().expect("Failed to create temp dir");
    let qr_box = QrCodeBox::default();

    let generated = qr_box.generate_from_text("bmp");
    let image = generated.image.expect("生成画像がない");

    let saved = qr_box.save_image_to_file(&image, &dir.path().join("out"), OutputFormat::Bmp);
    assert!(saved.success, "{}", saved.message);
    assert!(dir.path().join("out.bmp").exists());
}

/// 空パスでの保存は検証エラー
#[test]
fn test_save_to_empty_path_fails() {
    let qr_box = QrCodeBox::default();
    let generated = qr_box.generate_from_text("x");
    let image = generated.image.expect("生成画像がない");

    let saved = qr_box.save_image_to_file(&image, Path::new(""), OutputFormat::Png);
    assert!(!saved.success);
    assert!(saved.message.contains("指定されていません"));
}

/// 存在しないファイルの認識は検証エラー
#[test]
fn test_decode_missing_file_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let qr_box = QrCodeBox::default();

    let outcome = qr_box.decode_from_file(&dir.path().join("missing.png"));
    assert!(!outcome.success);
    assert!(outcome.message.contains("ファイルが見つかりません"));
}

/// 画像でないファイルの認識は読み込みエラーとして報告される
#[test]
fn test_decode_non_image_file_fails() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("not_image.png");
    std::fs::write(&path, b"this is not an image").unwrap();

    let qr_box = QrCodeBox::default();
    let outcome = qr_box.decode_from_file(&path);

    assert!(!outcome.success);
    assert!(outcome.message.contains("画像読み込みエラー"));
}

/// 1000文字ちょうどはエンコードできる
#[test]
fn test_text_at_limit_is_encoded() {
    let qr_box = QrCodeBox::default();
    let text = "a".repeat(1000);

    let generated = qr_box.generate_from_text(&text);
    assert!(generated.success, "{}", generated.message);
}
