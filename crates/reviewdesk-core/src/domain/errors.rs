//! Errors - エラー型と分類
//!
//! # 分類
//! - NoteError: 入力検証エラー（ユーザーに表示、状態は変えない）
//! - FetchError: タスク取得エラー（ユーザーに表示、タスク一覧は前回のまま）
//! - StorageError: 永続化エラー（StorageGateway が吸収し、ログのみ）

use thiserror::Error;

/// NoteError はメモ入力の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteError {
    #[error("note is empty")]
    EmptyNote,

    #[error("note is too long: {length} characters (max {max})")]
    TooLong { length: usize, max: usize },
}

/// FetchError はタスク API 呼び出しの失敗
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// 通信失敗、タイムアウト、レスポンスの JSON デコード失敗
    #[error("network error: {0}")]
    Network(String),

    /// 2xx 以外のステータス
    #[error("API request failed with status {status}{}", detail_suffix(.detail))]
    Api { status: u16, detail: Option<String> },
}

impl FetchError {
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    match detail {
        Some(detail) => format!(" ({detail})"),
        None => String::new(),
    }
}

/// StorageError はキーバリューストアの失敗
///
/// 呼び出し元（StorageGateway）で握りつぶされ、利用者には見えない。
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage quota exceeded: {needed} bytes requested, {quota} bytes allowed")]
    QuotaExceeded { needed: usize, quota: usize },

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage backend is corrupt: {0}")]
    Corrupt(String),
}
