use qrbox_common::format::OutputFormat;
use qrbox_common::list::{Discipline, ItemList};
use serde::Deserialize;
use std::path::PathBuf;

/// CLI側の設定ファイル（デスクトップからは読み取りのみ）
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub default_format: OutputFormat,
}

/// リストエディタ1画面分の状態
///
/// コレクション本体と入力欄・表示スナップショット・通知行を持つ。
/// スタック/キューの違いはコレクションの規律だけ。
#[derive(Debug, Clone)]
pub struct ListPane {
    pub list: ItemList,
    pub input: String,
    pub shown: Vec<String>,
    pub status: String,
}

impl ListPane {
    pub fn new(discipline: Discipline) -> Self {
        Self {
            list: ItemList::new(discipline),
            input: String::new(),
            shown: Vec::new(),
            status: String::new(),
        }
    }

    /// 追加ボタン
    pub fn handle_add(&mut self) {
        let label = self.list.discipline().label();
        match self.list.add(&self.input) {
            Ok(()) => {
                self.status = format!("要素 '{}' を{}に追加しました", self.input, label);
                self.input.clear();
            }
            Err(_) => self.status = "追加する要素を入力してください".to_string(),
        }
    }

    /// 削除ボタン
    pub fn handle_remove(&mut self) {
        let label = self.list.discipline().label();
        match self.list.remove() {
            Some(item) => self.status = format!("要素 '{}' を{}から削除しました", item, label),
            None => self.status = format!("{}は空です", label),
        }
    }

    /// 表示ボタン（現在の内容のスナップショットを表示欄に反映）
    pub fn handle_show(&mut self) {
        self.shown = self.list.iter().map(|s| s.to_string()).collect();
        self.status = format!(
            "{}の内容を表示しました（{}件）",
            self.list.discipline().label(),
            self.shown.len()
        );
    }
}

/// QRフォーム1画面分の状態
#[derive(Debug, Clone, Default)]
pub struct QrPane {
    pub text_input: String,
    pub decoded_text: String,
    pub image_path: Option<PathBuf>,
    pub status: String,
}
