use clap::Parser;
use qrbox_rust::{cli, config, editor, error, qrbox};

use cli::{Cli, Commands};
use config::Config;
use error::{QrBoxError, Result};
use qrbox::{QrCodeBox, QrOutcome};
use qrbox_common::format::OutputFormat;
use qrbox_common::list::Discipline;
use qrbox_common::payload;
use std::path::PathBuf;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let qr_box = QrCodeBox::new(config.qr_scale);

    match cli.command {
        Commands::Encode { text, output, format } => {
            println!("🔳 qrbox - QRコード生成\n");

            let outcome = qr_box.generate_from_text(&text);
            save_generated_image(
                &qr_box,
                outcome,
                output,
                format.unwrap_or(config.default_format),
            )?;
        }

        Commands::Url { url, output, format } => {
            println!("🔗 qrbox - URL用QRコード生成\n");

            if cli.verbose {
                println!("  エンコード内容: {}", payload::ensure_url_scheme(&url));
            }

            let outcome = qr_box.generate_for_url(&url);
            save_generated_image(
                &qr_box,
                outcome,
                output,
                format.unwrap_or(config.default_format),
            )?;
        }

        Commands::Contact { name, phone, email, output, format } => {
            println!("👤 qrbox - 連絡先QRコード生成\n");

            if cli.verbose {
                println!("  エンコード内容:\n{}\n", payload::build_vcard(&name, &phone, &email));
            }

            let outcome = qr_box.generate_for_contact(&name, &phone, &email);
            save_generated_image(
                &qr_box,
                outcome,
                output,
                format.unwrap_or(config.default_format),
            )?;
        }

        Commands::Decode { input, output } => {
            println!("🔍 qrbox - QRコード認識\n");

            let outcome = qr_box.decode_from_file(&input);
            if !outcome.success {
                return Err(QrBoxError::Operation(outcome.message));
            }
            println!("✔ {}", outcome.message);

            let text = outcome.decoded_text.unwrap_or_default();
            println!("\n{}", text);

            if let Some(output) = output {
                std::fs::write(&output, &text)?;
                println!("\n✔ 認識結果を保存しました: {}", output.display());
            }
        }

        Commands::Stack => {
            editor::run_interactive_editor(Discipline::Stack)?;
        }

        Commands::Queue => {
            editor::run_interactive_editor(Discipline::Queue)?;
        }

        Commands::Config { set_format, set_scale, show } => {
            let mut config = config;

            if let Some(format) = set_format {
                config.default_format = format;
                config.save()?;
                println!("✔ 既定の出力形式を設定しました: {}", format);
            }

            if let Some(scale) = set_scale {
                config.qr_scale = scale.max(1);
                config.save()?;
                println!("✔ QR描画スケールを設定しました: {}", config.qr_scale);
            }

            if show || (set_format.is_none() && set_scale.is_none()) {
                println!("設定:");
                println!("  既定の出力形式: {}", config.default_format);
                println!("  QR描画スケール: {}", config.qr_scale);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// 生成結果の画像を保存して結果を報告する
fn save_generated_image(
    qr_box: &QrCodeBox,
    outcome: QrOutcome,
    output: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    if !outcome.success {
        return Err(QrBoxError::Operation(outcome.message));
    }
    println!("✔ {}", outcome.message);

    let image = outcome
        .image
        .ok_or_else(|| QrBoxError::Operation("生成結果に画像がありません".to_string()))?;

    // 拡張子なしの既定パス。保存側が形式に応じた拡張子を補完する
    let output = output.unwrap_or_else(|| PathBuf::from("qr"));
    let saved = qr_box.save_image_to_file(&image, &output, format);
    if !saved.success {
        return Err(QrBoxError::Operation(saved.message));
    }
    println!("✔ {}", saved.message);

    Ok(())
}
