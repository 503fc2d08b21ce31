//! QR Box Common Library
//!
//! CLIとデスクトップアプリで共有される型とユーティリティ

pub mod error;
pub mod format;
pub mod list;
pub mod payload;
pub mod validation;

pub use error::{Error, Result};
pub use format::{ensure_extension, OutputFormat};
pub use list::{Discipline, ItemList};
pub use payload::{build_vcard, ensure_url_scheme};
pub use validation::{validate_image_size, validate_qr_text};
