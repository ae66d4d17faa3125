//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryKeyValueStore**: 開発・テスト用の永続ストア
//! - **FileKeyValueStore**: JSON ファイルに保存する永続ストア
//! - **HttpTaskClient**: reqwest によるタスク API クライアント

pub mod file_kv;
pub mod http_tasks;
pub mod inmem_kv;

// 主要な型を再エクスポート
pub use self::file_kv::FileKeyValueStore;
pub use self::http_tasks::HttpTaskClient;
pub use self::inmem_kv::InMemoryKeyValueStore;
