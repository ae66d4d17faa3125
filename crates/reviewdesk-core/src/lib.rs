//! reviewdesk-core
//!
//! Core building blocks for the review console.
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（Note, Task, StatusFilter, 画面状態, errors）
//! - **ports**: 抽象化レイヤー（KeyValueStore, TaskSource, Renderer, Clock, IdGenerator）
//! - **app**: アプリケーションロジック（StorageGateway, NoteStore, ViewController, builder）
//! - **impls**: ports の実装（InMemory/File の KeyValueStore, HttpTaskClient）
//! - **config**: TOML 設定

pub mod app;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;

pub use app::{BuildError, ConsoleBuilder, NoteStore, StorageGateway, UiEvent, ViewController};
pub use config::{ConfigError, ConsoleConfig};
