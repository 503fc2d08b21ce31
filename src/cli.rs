use clap::{Parser, Subcommand};
use qrbox_common::format::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "qrbox")]
#[command(about = "QRコード生成・読取とスタック/キュー操作のデモツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// エンコード内容などの詳細を出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// テキストからQRコードを生成して画像に保存
    Encode {
        /// エンコードするテキスト（最大1000文字）
        #[arg(required = true)]
        text: String,

        /// 出力画像ファイル（デフォルト: qr + 形式に応じた拡張子）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (png/jpeg/bmp)。省略時は設定の既定値
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// URL用のQRコードを生成（http(s)スキームがなければ補完）
    Url {
        /// 対象URL
        #[arg(required = true)]
        url: String,

        /// 出力画像ファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (png/jpeg/bmp)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// 連絡先（vCard）のQRコードを生成
    Contact {
        /// 氏名
        #[arg(long)]
        name: String,

        /// 電話番号
        #[arg(long)]
        phone: String,

        /// メールアドレス
        #[arg(long)]
        email: String,

        /// 出力画像ファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 出力形式 (png/jpeg/bmp)
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// 画像ファイルのQRコードを認識してテキストを表示
    Decode {
        /// 入力画像ファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 認識したテキストの保存先（省略時は表示のみ）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// スタック規律（後入れ先出し）のリストエディタを起動
    Stack,

    /// キュー規律（先入れ先出し）のリストエディタを起動
    Queue,

    /// 設定を表示/編集
    Config {
        /// 既定の出力形式を設定 (png/jpeg/bmp)
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// QR描画スケールを設定（1モジュールのピクセル数）
        #[arg(long)]
        set_scale: Option<u32>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
