//! Note - ローカルに保存されるレビューメモ
//!
//! Note は作成後に変更されない（immutable）。削除は NoteStore::remove か
//! 容量超過による追い出しのみ。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::errors::NoteError;

/// メモ本文の最大文字数（trim 後）
pub const MAX_NOTE_LENGTH: usize = 220;

/// 保持するメモの最大件数
pub const NOTE_CAPACITY: usize = 50;

/// Note の識別子
///
/// UUID と `<millis>-<hex>` 形式のどちらも入り得るので、中身は文字列のまま扱う。
/// 保存済みデータ（外部由来）もそのまま受け入れるため。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// 保存済みのメモ 1 件
///
/// JSON 表現は `{ "id", "text", "createdAt" }`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// 検証済みの本文から Note を作る
    pub fn new(id: NoteId, text: NoteText, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into_inner(),
            created_at,
        }
    }
}

/// 検証済みのメモ本文
///
/// # 不変条件
/// - 前後の空白は除去済み
/// - 1 <= 文字数 <= MAX_NOTE_LENGTH
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteText(String);

impl NoteText {
    /// 入力をそのまま受け取り、trim してから検証する
    pub fn parse(raw: &str) -> Result<Self, NoteError> {
        let text = raw.trim();
        let length = text_length(text);
        if length == 0 {
            return Err(NoteError::EmptyNote);
        }
        if length > MAX_NOTE_LENGTH {
            return Err(NoteError::TooLong {
                length,
                max: MAX_NOTE_LENGTH,
            });
        }
        Ok(Self(text.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// 文字数のカウント（Unicode scalar value 単位）
pub fn text_length(text: &str) -> usize {
    text.chars().count()
}
