use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::CliConfig;
use image::DynamicImage;
use qrbox_common::format::{ensure_extension, OutputFormat};

/// CLI側の設定を読む（なければ既定値）
///
/// 設定ファイルが壊れていても起動は止めない。
pub fn load_cli_config() -> CliConfig {
    let Some(home) = dirs::home_dir() else {
        return CliConfig::default();
    };
    let path = home.join(".config").join("qrbox").join("config.json");
    let Ok(content) = fs::read_to_string(&path) else {
        return CliConfig::default();
    };
    serde_json::from_str(&content).unwrap_or_default()
}

/// 表示中の画像を保存する（拡張子がなければ既定のものを補完）
pub fn save_displayed_image(
    image: &DynamicImage,
    path: &Path,
    fallback: OutputFormat,
) -> Result<PathBuf> {
    let path = ensure_extension(path, fallback);
    image
        .save(&path)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// 生成プレビュー画像の受け渡しファイル
pub fn default_preview_path() -> PathBuf {
    std::env::temp_dir().join("qrbox-preview.png")
}

/// 認識結果テキストの受け渡しファイル
pub fn default_decode_text_path() -> PathBuf {
    std::env::temp_dir().join("qrbox-decoded.txt")
}
