use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};
use image::DynamicImage;

use crate::io::{
    default_decode_text_path, default_preview_path, load_cli_config, save_displayed_image,
};
use crate::model::{ListPane, QrPane};
use qrbox_common::format::OutputFormat;
use qrbox_common::list::Discipline;

pub struct DesktopApp {
    demo: Demo,
    stack_pane: ListPane,
    queue_pane: ListPane,
    qr: QrPane,
    default_format: OutputFormat,
    qr_texture: Option<egui::TextureHandle>,
    qr_image: Option<DynamicImage>,
    encode_rx: Option<Receiver<UiMessage>>,
    decode_rx: Option<Receiver<UiMessage>>,
    encoding: bool,
    decoding: bool,
}

/// 表示中のデモ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Demo {
    Stack,
    Queue,
    Qr,
}

enum UiMessage {
    EncodeDone { ok: bool, message: String, output: Option<PathBuf> },
    DecodeDone { ok: bool, message: String, text: Option<String> },
}

impl Default for DesktopApp {
    fn default() -> Self {
        let config = load_cli_config();
        Self {
            demo: Demo::Stack,
            stack_pane: ListPane::new(Discipline::Stack),
            queue_pane: ListPane::new(Discipline::Queue),
            qr: QrPane::default(),
            default_format: config.default_format,
            qr_texture: None,
            qr_image: None,
            encode_rx: None,
            decode_rx: None,
            encoding: false,
            decoding: false,
        }
    }
}

impl DesktopApp {
    /// エンコードをCLIに委譲して結果画像を受け取る
    fn run_encode(&mut self) {
        let text = self.qr.text_input.clone();
        let output = default_preview_path();
        let cli = resolve_cli_binary();
        let (tx, rx) = mpsc::channel();
        self.encode_rx = Some(rx);
        self.encoding = true;
        self.qr.status = "QRコード生成中...".to_string();

        std::thread::spawn(move || {
            let result = std::process::Command::new(cli)
                .args([
                    "encode",
                    text.as_str(),
                    "--output",
                    output.to_string_lossy().as_ref(),
                    "--format",
                    "png",
                ])
                .output();

            let message = match result {
                Ok(out) if out.status.success() => UiMessage::EncodeDone {
                    ok: true,
                    message: "QRコードを生成しました".to_string(),
                    output: Some(output),
                },
                Ok(out) => {
                    let stderr = String::from_utf8_lossy(&out.stderr);
                    UiMessage::EncodeDone {
                        ok: false,
                        message: format!("生成に失敗しました: {}", stderr.trim()),
                        output: None,
                    }
                }
                Err(err) => UiMessage::EncodeDone {
                    ok: false,
                    message: format!("生成に失敗しました: {err}"),
                    output: None,
                },
            };
            let _ = tx.send(message);
        });
    }

    /// 表示中の画像の認識をCLIに委譲する
    fn run_decode(&mut self) {
        let Some(path) = self.qr.image_path.clone() else {
            self.qr.status = "先に画像を読み込んでください".to_string();
            return;
        };
        let text_out = default_decode_text_path();
        let cli = resolve_cli_binary();
        let (tx, rx) = mpsc::channel();
        self.decode_rx = Some(rx);
        self.decoding = true;
        self.qr.status = "QRコード認識中...".to_string();

        std::thread::spawn(move || {
            let result = std::process::Command::new(cli)
                .args([
                    "decode",
                    path.to_string_lossy().as_ref(),
                    "--output",
                    text_out.to_string_lossy().as_ref(),
                ])
                .output();

            let message = match result {
                Ok(out) if out.status.success() => match std::fs::read_to_string(&text_out) {
                    Ok(text) => UiMessage::DecodeDone {
                        ok: true,
                        message: "QRコードを認識しました".to_string(),
                        text: Some(text),
                    },
                    Err(err) => UiMessage::DecodeDone {
                        ok: false,
                        message: format!("認識結果の読み込みに失敗しました: {err}"),
                        text: None,
                    },
                },
                Ok(out) => {
                    let stderr = String::from_utf8_lossy(&out.stderr);
                    UiMessage::DecodeDone {
                        ok: false,
                        message: format!("認識に失敗しました: {}", stderr.trim()),
                        text: None,
                    }
                }
                Err(err) => UiMessage::DecodeDone {
                    ok: false,
                    message: format!("認識に失敗しました: {err}"),
                    text: None,
                },
            };
            let _ = tx.send(message);
        });
    }

    /// 画像ファイルを開いて表示する
    fn open_image(&mut self, ctx: &egui::Context) {
        let mut dialog = rfd::FileDialog::new();
        for (name, extensions) in OutputFormat::dialog_filters() {
            dialog = dialog.add_filter(*name, extensions);
        }
        let Some(path) = dialog.pick_file() else {
            return;
        };

        match image::open(&path) {
            Ok(image) => {
                self.qr.status = format!("画像を読み込みました: {}", path.display());
                self.qr.decoded_text.clear();
                self.set_displayed_image(ctx, image, path);
            }
            Err(err) => self.qr.status = format!("読み込みに失敗しました: {err}"),
        }
    }

    /// 表示中の画像を保存する
    fn save_image(&mut self) {
        let Some(image) = self.qr_image.as_ref() else {
            self.qr.status = "保存する画像がありません".to_string();
            return;
        };

        let mut dialog = rfd::FileDialog::new().set_file_name("qr.png");
        for (name, extensions) in OutputFormat::dialog_filters() {
            dialog = dialog.add_filter(*name, extensions);
        }
        let Some(path) = dialog.save_file() else {
            return;
        };

        match save_displayed_image(image, &path, self.default_format) {
            Ok(saved) => self.qr.status = format!("画像を保存しました: {}", saved.display()),
            Err(err) => self.qr.status = format!("保存に失敗しました: {err}"),
        }
    }

    fn set_displayed_image(&mut self, ctx: &egui::Context, image: DynamicImage, path: PathBuf) {
        let rgba = image.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        // QRのモジュールがにじまないよう最近傍補間で表示する
        self.qr_texture =
            Some(ctx.load_texture("qr_display", color_image, egui::TextureOptions::NEAREST));
        self.qr_image = Some(image);
        self.qr.image_path = Some(path);
    }

    fn poll_messages(&mut self, ctx: &egui::Context) {
        if let Some(rx) = &self.encode_rx {
            if let Ok(msg) = rx.try_recv() {
                if let UiMessage::EncodeDone { ok, message, output } = msg {
                    self.qr.status = message;
                    self.encoding = false;
                    self.encode_rx = None;
                    if ok {
                        if let Some(path) = output {
                            match image::open(&path) {
                                Ok(image) => {
                                    self.qr.decoded_text.clear();
                                    self.set_displayed_image(ctx, image, path);
                                }
                                Err(err) => {
                                    self.qr.status =
                                        format!("生成画像の読み込みに失敗しました: {err}");
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(rx) = &self.decode_rx {
            if let Ok(msg) = rx.try_recv() {
                if let UiMessage::DecodeDone { ok, message, text } = msg {
                    self.qr.status = message;
                    self.decoding = false;
                    self.decode_rx = None;
                    if ok {
                        self.qr.decoded_text = text.unwrap_or_default();
                    }
                }
            }
        }
    }

    fn render_qr_pane(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.heading("QRコード");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("テキスト");
            ui.add(egui::TextEdit::singleline(&mut self.qr.text_input).desired_width(320.0));
            if ui
                .add_enabled(!self.encoding, egui::Button::new("エンコード"))
                .clicked()
            {
                self.run_encode();
            }
        });

        let has_image = self.qr_image.is_some();
        ui.horizontal(|ui| {
            if ui.button("読み込み").clicked() {
                self.open_image(ctx);
            }
            if ui
                .add_enabled(has_image && !self.decoding, egui::Button::new("認識"))
                .clicked()
            {
                self.run_decode();
            }
            if ui
                .add_enabled(has_image, egui::Button::new("保存"))
                .clicked()
            {
                self.save_image();
            }
        });

        if !self.qr.status.is_empty() {
            ui.label(RichText::new(&self.qr.status).color(Color32::from_gray(170)));
        }
        ui.separator();

        ui.horizontal(|ui| {
            if let Some(texture) = &self.qr_texture {
                ui.add(egui::Image::new(texture).fit_to_exact_size(egui::vec2(260.0, 260.0)));
            } else {
                ui.allocate_ui_with_layout(
                    egui::vec2(260.0, 260.0),
                    egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                    |ui| {
                        ui.label("画像がありません");
                    },
                );
            }

            ui.add_space(8.0);
            ui.group(|ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new("認識結果").strong());
                if self.qr.decoded_text.is_empty() {
                    ui.label("-");
                } else {
                    ui.label(&self.qr.decoded_text);
                }
            });
        });
    }
}

/// リストエディタ画面（スタック/キュー共通）
fn render_list_pane(ui: &mut egui::Ui, pane: &mut ListPane) {
    ui.heading(format!("{}エディタ", pane.list.discipline().label()));
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label("要素");
        ui.add(egui::TextEdit::singleline(&mut pane.input).desired_width(240.0));
        if ui.button("追加").clicked() {
            pane.handle_add();
        }
        if ui.button("削除").clicked() {
            pane.handle_remove();
        }
        if ui.button("表示").clicked() {
            pane.handle_show();
        }
    });

    if !pane.status.is_empty() {
        ui.label(RichText::new(&pane.status).color(Color32::from_gray(170)));
    }

    ui.separator();
    ui.label(format!("{}件", pane.list.len()));
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (i, item) in pane.shown.iter().enumerate() {
                ui.label(format!("[{}] {}", i + 1, item));
            }
        });
}

pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    let candidates = [
        r"C:\Windows\Fonts\meiryo.ttc",
        r"C:\Windows\Fonts\msgothic.ttc",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ];

    for path in candidates {
        if let Ok(data) = std::fs::read(path) {
            fonts.font_data.insert("jp_fallback".to_string(), FontData::from_owned(data));
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, "jp_fallback".to_string());
            fonts.families
                .entry(FontFamily::Monospace)
                .or_default()
                .insert(0, "jp_fallback".to_string());
            ctx.set_fonts(fonts);
            return;
        }
    }
}

impl eframe::App for DesktopApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.encoding || self.decoding {
            ctx.request_repaint();
        }
        self.poll_messages(ctx);

        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.demo, Demo::Stack, "スタック");
                ui.selectable_value(&mut self.demo, Demo::Queue, "キュー");
                ui.selectable_value(&mut self.demo, Demo::Qr, "QRコード");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.demo {
            Demo::Stack => render_list_pane(ui, &mut self.stack_pane),
            Demo::Queue => render_list_pane(ui, &mut self.queue_pane),
            Demo::Qr => self.render_qr_pane(ui, ctx),
        });
    }
}

fn resolve_cli_binary() -> PathBuf {
    let exe = std::env::current_exe().ok();
    if let Some(base_dir) = exe.as_ref().and_then(|p| p.parent()) {
        for name in ["qrbox-rust.exe", "qrbox-rust"] {
            let local = base_dir.join(name);
            if local.exists() {
                return local;
            }
            if let Some(target_dir) = base_dir.parent() {
                let sibling = target_dir.join("debug").join(name);
                if sibling.exists() {
                    return sibling;
                }
                let release = target_dir.join("release").join(name);
                if release.exists() {
                    return release;
                }
            }
        }
    }
    PathBuf::from("qrbox-rust")
}
