//! 出力画像フォーマット
//!
//! 保存時の拡張子補完とファイルダイアログのフィルタ定義を持つ。

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 出力画像フォーマット (png/jpeg/bmp)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    Bmp,
}

impl OutputFormat {
    /// 拡張子のないパスに付ける既定の拡張子
    pub fn default_extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => ".png",
            OutputFormat::Jpeg => ".jpg",
            OutputFormat::Bmp => ".bmp",
        }
    }

    /// ファイルダイアログ用のフィルタ（表示名と拡張子リスト）
    pub fn dialog_filters() -> &'static [(&'static str, &'static [&'static str])] {
        &[
            ("PNG", &["png"]),
            ("JPEG", &["jpg", "jpeg"]),
            ("BMP", &["bmp"]),
        ]
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "bmp" => Ok(OutputFormat::Bmp),
            _ => Err(format!("Unknown format: {}. Use png, jpeg, or bmp", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => write!(f, "png"),
            OutputFormat::Jpeg => write!(f, "jpeg"),
            OutputFormat::Bmp => write!(f, "bmp"),
        }
    }
}

/// パスに拡張子がなければフォーマット既定の拡張子を付ける
///
/// 既に拡張子があるパスはそのまま返す（中身との不一致は保存側の責務）。
pub fn ensure_extension(path: &Path, format: OutputFormat) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }
    let mut raw = path.as_os_str().to_os_string();
    raw.push(format.default_extension());
    PathBuf::from(raw)
}
