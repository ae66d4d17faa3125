//! InMemoryKeyValueStore - 開発・テスト用のキーバリューストア
//!
//! # 学習ポイント
//! - Arc<Mutex<..>> で clone したハンドル同士が同じ中身を共有する
//! - quota で localStorage の容量超過を再現できる

use crate::domain::StorageError;
use crate::ports::KeyValueStore;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// InMemoryKeyValueStore はメモリ上のキーバリューストア
///
/// clone したハンドルは同じストアを指す。テストでは片方を NoteStore に渡し、
/// もう片方で中身を覗いたり壊したりする。
#[derive(Debug, Clone, Default)]
pub struct InMemoryKeyValueStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    /// 全値の合計バイト数の上限
    quota: Option<usize>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 合計バイト数の上限を設定
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota = Some(bytes);
        self
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        // 中身は単純な HashMap なので poison されても使い続けてよい
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock();
        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > quota {
                return Err(StorageError::QuotaExceeded { needed, quota });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
