//! QRコード操作のブラックボックス
//!
//! 生成・認識・ファイル入出力をひとつの窓口に集約する。コーデック本体は
//! 外部クレート（qrcode / rqrr）に委譲し、ここでは入力検証と結果の整形
//! だけを行う。公開メソッドはエラーを送出せず、必ず[`QrOutcome`]で返す。

mod outcome;

pub use outcome::QrOutcome;

use crate::error::{QrBoxError, Result};
use image::DynamicImage;
use qrbox_common::format::{self, OutputFormat};
use qrbox_common::{payload, validation};
use qrcode::{EcLevel, QrCode};
use std::path::Path;

/// 1モジュールあたりの既定描画ピクセル数
pub const DEFAULT_SCALE: u32 = 4;

/// QRコード操作のファサード
pub struct QrCodeBox {
    /// 1モジュールあたりの描画ピクセル数
    scale: u32,
    /// 誤り訂正レベル（固定）
    ec_level: EcLevel,
}

impl Default for QrCodeBox {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

impl QrCodeBox {
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.max(1),
            ec_level: EcLevel::M,
        }
    }

    /// テキストからQRコードを生成
    pub fn generate_from_text(&self, text: &str) -> QrOutcome {
        match self.encode(text) {
            Ok(image) => QrOutcome::success("QRコードを生成しました").with_image(image),
            Err(e) => QrOutcome::failure(e.to_string()),
        }
    }

    /// URL用のQRコードを生成（スキーム補完つき）
    pub fn generate_for_url(&self, url: &str) -> QrOutcome {
        self.generate_from_text(&payload::ensure_url_scheme(url))
    }

    /// 連絡先（vCard）用のQRコードを生成
    pub fn generate_for_contact(&self, name: &str, phone: &str, email: &str) -> QrOutcome {
        self.generate_from_text(&payload::build_vcard(name, phone, email))
    }

    /// 画像からQRコードを認識
    ///
    /// 成功時は`decoded_text`にテキストを載せる。入力画像は呼び出し側が
    /// 保持しているため結果には添付しない。
    pub fn decode_from_image(&self, image: &DynamicImage) -> QrOutcome {
        match self.decode(image) {
            Ok(text) => QrOutcome::success("QRコードを認識しました").with_decoded_text(text),
            Err(e) => QrOutcome::failure(e.to_string()),
        }
    }

    /// 画像ファイルを読み込んでQRコードを認識
    ///
    /// 成功時は読み込んだ画像も結果に添付する。
    pub fn decode_from_file(&self, path: &Path) -> QrOutcome {
        if path.as_os_str().is_empty() {
            return QrOutcome::failure("ファイルパスが指定されていません");
        }
        if !path.exists() {
            return QrOutcome::failure(
                QrBoxError::FileNotFound(path.display().to_string()).to_string(),
            );
        }

        let image = match image::open(path) {
            Ok(image) => image,
            Err(e) => {
                return QrOutcome::failure(QrBoxError::ImageLoad(e.to_string()).to_string())
            }
        };

        let mut result = self.decode_from_image(&image);
        if result.success {
            result.image = Some(image);
        }
        result
    }

    /// 画像をファイルに保存
    ///
    /// パスに拡張子がなければフォーマット既定の拡張子を補完する。
    pub fn save_image_to_file(
        &self,
        image: &DynamicImage,
        path: &Path,
        format: OutputFormat,
    ) -> QrOutcome {
        if path.as_os_str().is_empty() {
            return QrOutcome::failure("保存先のパスが指定されていません");
        }

        let path = format::ensure_extension(path, format);
        match image.save_with_format(&path, image_format(format)) {
            Ok(()) => {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                QrOutcome::success(format!("画像を保存しました: {}", file_name))
            }
            Err(e) => QrOutcome::failure(QrBoxError::ImageSave(e.to_string()).to_string()),
        }
    }

    // 内部実装

    fn encode(&self, text: &str) -> Result<DynamicImage> {
        validation::validate_qr_text(text)?;

        let code = QrCode::with_error_correction_level(text.as_bytes(), self.ec_level)
            .map_err(|e| QrBoxError::Encode(e.to_string()))?;
        let image = code
            .render::<image::Luma<u8>>()
            .module_dimensions(self.scale, self.scale)
            .build();

        Ok(DynamicImage::ImageLuma8(image))
    }

    fn decode(&self, image: &DynamicImage) -> Result<String> {
        validation::validate_image_size(image.width(), image.height())?;

        let gray = image.to_luma8();
        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            gray.width() as usize,
            gray.height() as usize,
            |x, y| gray.get_pixel(x as u32, y as u32)[0],
        );

        let grids = prepared.detect_grids();
        let grid = grids
            .first()
            .ok_or_else(|| QrBoxError::Decode("QRコードが見つかりません".to_string()))?;
        let (_meta, content) = grid
            .decode()
            .map_err(|e| QrBoxError::Decode(e.to_string()))?;

        Ok(content)
    }
}

fn image_format(format: OutputFormat) -> image::ImageFormat {
    match format {
        OutputFormat::Png => image::ImageFormat::Png,
        OutputFormat::Jpeg => image::ImageFormat::Jpeg,
        OutputFormat::Bmp => image::ImageFormat::Bmp,
    }
}
