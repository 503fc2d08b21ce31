//! qrbox-rust ライブラリ
//!
//! QRコード操作のブラックボックスと対話式リストエディタ。
//! CLI（main.rs）と統合テストから利用する。

pub mod cli;
pub mod config;
pub mod editor;
pub mod error;
pub mod qrbox;

pub use error::{QrBoxError, Result};
pub use qrbox::{QrCodeBox, QrOutcome};
