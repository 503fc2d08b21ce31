use thiserror::Error;

#[derive(Error, Debug)]
pub enum QrBoxError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("画像読み込みエラー: {0}")]
    ImageLoad(String),

    #[error("QRコード生成エラー: {0}")]
    Encode(String),

    #[error("QRコード認識エラー: {0}")]
    Decode(String),

    #[error("画像保存エラー: {0}")]
    ImageSave(String),

    #[error("{0}")]
    Operation(String),

    #[error("対話入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] qrbox_common::Error),
}

pub type Result<T> = std::result::Result<T, QrBoxError>;
