//! App - アプリケーション層
//!
//! このモジュールは、ports を組み合わせてアプリケーションロジックを実装します。
//!
//! # 主要コンポーネント
//! - **StorageGateway**: メモ配列の永続化（失敗はすべて吸収）
//! - **NoteStore**: メモ一覧の検証・件数制限・保存
//! - **ViewController**: 画面イベントの処理と一時状態の管理
//! - **ConsoleBuilder**: 設定からのワイヤリング
//! - **render**: 表示文字列を作る純粋関数

pub mod builder;
pub mod controller;
pub mod note_store;
pub mod render;
pub mod storage;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, ConsoleBuilder};
pub use self::controller::{UiEvent, ViewController};
pub use self::note_store::NoteStore;
pub use self::storage::{DEFAULT_STORAGE_KEY, StorageGateway};
