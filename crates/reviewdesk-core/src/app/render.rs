//! Render - 表示文字列の組み立て（純粋関数）
//!
//! Renderer 実装とコントローラーの両方から使う。副作用なし。

use chrono::{DateTime, Local, Utc};

use crate::domain::{CounterDisplay, MAX_NOTE_LENGTH, NoteError, StatusFilter, Task, text_length};

pub const NOTES_EMPTY_MESSAGE: &str = "まだメモはありません。レビュー時のメモ取りに使ってください。";
pub const NOTE_SAVED_MESSAGE: &str = "メモを保存しました。";
pub const FETCH_FAILED_MESSAGE: &str = "再取得に失敗しました。時間をおいて再度お試しください。";

/// 入力中の文字列からカウンター表示を作る
///
/// 前後の空白は数えない。上限の 9 割を超えたら警告。
pub fn counter_for(input: &str) -> CounterDisplay {
    let length = text_length(input.trim());
    CounterDisplay {
        length,
        max: MAX_NOTE_LENGTH,
        warning: length * 10 > MAX_NOTE_LENGTH * 9,
    }
}

/// 検証エラーをユーザー向けの文言にする
pub fn note_error_message(error: &NoteError) -> String {
    match error {
        NoteError::EmptyNote => "メモが空です。内容を入力してください。".to_string(),
        NoteError::TooLong { max, .. } => format!("メモは{max}文字以内にしてください。"),
    }
}

/// 取得成功時のステータス行
pub fn task_summary(count: usize, filter: &StatusFilter) -> String {
    if count == 0 {
        return "該当するタスクはありません".to_string();
    }
    match filter.as_query() {
        Some(status) => format!("{count}件を表示中（{status}）"),
        None => format!("{count}件を表示中"),
    }
}

/// タスク一覧が空のときの案内
pub fn tasks_empty_message(filter: &StatusFilter) -> String {
    match filter.as_query() {
        Some(status) => format!("「{status}」のタスクはありません"),
        None => "タスクはまだありません。".to_string(),
    }
}

pub fn task_meta_line(task: &Task) -> String {
    format!("担当: {} · 状態: {}", task.owner, task.status)
}

/// メモの保存時刻をローカル時刻で表示する
pub fn note_meta_line(created_at: &DateTime<Utc>) -> String {
    let local = created_at.with_timezone(&Local);
    format!("保存: {}", local.format("%Y/%m/%d %H:%M:%S"))
}
