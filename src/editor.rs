//! 対話式リストエディタ
//!
//! スタック/キュー規律の順序付きコレクションを追加・削除・表示の
//! 3操作で編集する。規律の違いはコレクション側に閉じていて、
//! このループは両方で共通。

use crate::error::{QrBoxError, Result};
use dialoguer::Input;
use qrbox_common::list::{Discipline, ItemList};

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorAction {
    /// 要素を追加
    Add(String),
    /// 要素を1つ削除
    Remove,
    /// 内容を表示
    Show,
    /// 終了
    Quit,
}

/// 入力行をアクションに解釈
///
/// 予約文字（r/s/q）以外はすべて追加対象のテキストとして扱う。
/// 空入力もAddに落として、コレクション側の検証で拒否させる。
pub fn parse_editor_action(input: &str) -> EditorAction {
    match input.trim() {
        "r" | "R" => EditorAction::Remove,
        "s" | "S" => EditorAction::Show,
        "q" | "Q" => EditorAction::Quit,
        other => EditorAction::Add(other.to_string()),
    }
}

/// 対話式でリストを編集
pub fn run_interactive_editor(discipline: Discipline) -> Result<()> {
    let mut list = ItemList::new(discipline);
    let label = discipline.label();

    println!("📋 qrbox - {}エディタ", label);
    println!("---");
    println!("操作: テキスト入力で追加 [r]削除 [s]表示 [q]終了");
    println!("---\n");

    loop {
        let input: String = Input::new()
            .with_prompt("要素")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| QrBoxError::Prompt(e.to_string()))?;

        match parse_editor_action(&input) {
            EditorAction::Add(item) => match list.add(&item) {
                Ok(()) => println!("  → 要素 '{}' を{}に追加しました\n", item, label),
                Err(_) => println!("  → 追加する要素を入力してください\n"),
            },
            EditorAction::Remove => match list.remove() {
                Some(item) => println!("  → 要素 '{}' を{}から削除しました\n", item, label),
                None => println!("  → {}は空です\n", label),
            },
            EditorAction::Show => show_items(&list),
            EditorAction::Quit => {
                println!("終了します");
                break;
            }
        }
    }

    Ok(())
}

/// 現在の内容を表示順で出力
fn show_items(list: &ItemList) {
    if list.is_empty() {
        println!("  → {}は空です\n", list.discipline().label());
        return;
    }

    for (i, item) in list.iter().enumerate() {
        println!("  [{}] {}", i + 1, item);
    }
    println!();
}
