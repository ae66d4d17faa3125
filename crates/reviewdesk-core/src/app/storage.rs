//! StorageGateway - メモ配列の永続化窓口
//!
//! KeyValueStore の失敗（壊れたデータ、容量超過、I/O）はすべてここで吸収し、
//! ログに残すだけにする。呼び出し側にはエラーが届かない。

use crate::domain::Note;
use crate::ports::KeyValueStore;

/// メモ配列を保存する既定のキー
pub const DEFAULT_STORAGE_KEY: &str = "codex_review_notes";

pub struct StorageGateway {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl StorageGateway {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: impl KeyValueStore + 'static, key: impl Into<String>) -> Self {
        Self {
            store: Box::new(store),
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// 保存済みのメモ配列を読む
    ///
    /// 値がない・読めない・JSON として壊れている場合は空配列。失敗しない。
    pub fn read(&self) -> Vec<Note> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read notes from storage");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Note>>(&raw) {
            Ok(notes) => notes,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "stored notes are corrupt; starting empty");
                Vec::new()
            }
        }
    }

    /// メモ配列を保存する（ベストエフォート）
    ///
    /// 失敗してもメモリ上の状態は巻き戻さない。
    pub fn write(&self, notes: &[Note]) {
        let serialized = match serde_json::to_string(notes) {
            Ok(serialized) => serialized,
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize notes");
                return;
            }
        };
        if let Err(e) = self.store.set(&self.key, &serialized) {
            tracing::warn!(key = %self.key, error = %e, "failed to persist notes");
        }
    }
}
