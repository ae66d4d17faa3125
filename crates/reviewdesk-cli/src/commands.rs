//! 標準入力の 1 行を UiEvent に読み替える

use reviewdesk_core::UiEvent;
use reviewdesk_core::domain::NoteId;

pub const HELP: &str = "\
commands:
  refresh           APIからタスクを再取得
  filter [status]   ステータスで絞り込んで再取得（省略で絞り込み解除）
  type <text>       メモ入力欄の内容を置き換える
  submit            入力欄のメモを保存
  note <text>       入力して保存
  delete <id>       メモを削除
  notes             保存済みメモを表示
  help              このヘルプ
  quit              終了";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// コントローラーにそのまま渡すイベント
    Event(UiEvent),
    /// 入力してから保存（`type` + `submit`）
    Note(String),
    Notes,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (name, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest),
        None => (trimmed, ""),
    };

    match name {
        "" => Command::Empty,
        "refresh" => Command::Event(UiEvent::RefreshClicked),
        "filter" => Command::Event(UiEvent::FilterChanged(rest.trim().to_string())),
        // 入力欄の値は検証前なので空白も含めて渡す
        "type" => Command::Event(UiEvent::NoteInput(rest.to_string())),
        "submit" => Command::Event(UiEvent::NoteSubmitted),
        "note" => Command::Note(rest.to_string()),
        "delete" => match rest.trim() {
            "" => Command::Unknown(line.to_string()),
            id => Command::Event(UiEvent::NoteDeleteClicked(NoteId::from(id))),
        },
        "notes" => Command::Notes,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}
