//! KeyValueStore port - 永続キーバリューストア
//!
//! ブラウザの localStorage 相当。同期 get/set のみで、トランザクションはない。
//! 失敗する前提の外部サービスとして扱う（容量超過、I/O エラー、壊れたデータ）。
//!
//! # 実装
//! - **InMemoryKeyValueStore**: テスト・開発用（容量制限を設定できる）
//! - **FileKeyValueStore**: JSON ファイルに保存

use crate::domain::StorageError;

/// KeyValueStore は文字列キーに文字列値を保存する
///
/// # 設計原則
/// - 書き込みは last-write-wins（ロックなし）
/// - 値の中身（JSON かどうか）は関知しない
pub trait KeyValueStore {
    /// 値を取得（キーがなければ `Ok(None)`）
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// 値を保存
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}
