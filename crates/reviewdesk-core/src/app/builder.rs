//! ConsoleBuilder - 設定からコンソールを組み立てる
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - ports の差し替え（テストではメモリ実装、本番ではファイル + HTTP）

use std::sync::Arc;

use super::controller::ViewController;
use super::note_store::NoteStore;
use super::storage::StorageGateway;
use crate::config::ConsoleConfig;
use crate::impls::{FileKeyValueStore, HttpTaskClient};
use crate::ports::{Clock, IdGenerator, KeyValueStore, Renderer, TaskSource};

/// ConsoleBuilder は ViewController を構築
///
/// # 使用例
/// ```ignore
/// let controller = ConsoleBuilder::new(config)
///     .build(TerminalRenderer::stdout())?;
/// ```
///
/// # Fail-fast 設計
/// - 保存キーが空、API の URL が http(s) でない場合は build() で BuildError
/// - 差し替えのない ports は設定から作る（FileKeyValueStore, HttpTaskClient）
pub struct ConsoleBuilder {
    config: ConsoleConfig,
    store: Option<Box<dyn KeyValueStore>>,
    tasks: Option<Arc<dyn TaskSource>>,
    ids: Option<Box<dyn IdGenerator>>,
    clock: Option<Box<dyn Clock>>,
}

/// BuildError はコンソール構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("storage key must not be empty")]
    EmptyStorageKey,

    #[error("api_base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl ConsoleBuilder {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            config,
            store: None,
            tasks: None,
            ids: None,
            clock: None,
        }
    }

    /// 永続ストアを差し替える（既定は storage_path の JSON ファイル）
    pub fn with_store(mut self, store: impl KeyValueStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// タスク取得を差し替える（既定は HttpTaskClient）
    pub fn with_task_source(mut self, tasks: Arc<dyn TaskSource>) -> Self {
        self.tasks = Some(tasks);
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Some(Box::new(ids));
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    /// 検証してから ViewController を作る
    ///
    /// 起動処理（`start`）は呼ばない。
    pub fn build<R: Renderer>(self, renderer: R) -> Result<ViewController<R>, BuildError> {
        if self.config.storage_key.trim().is_empty() {
            return Err(BuildError::EmptyStorageKey);
        }

        let tasks = match self.tasks {
            Some(tasks) => tasks,
            None => {
                let url = &self.config.api_base_url;
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(BuildError::InvalidBaseUrl(url.clone()));
                }
                Arc::new(HttpTaskClient::from_config(&self.config)?)
            }
        };

        let store: Box<dyn KeyValueStore> = match self.store {
            Some(store) => store,
            None => Box::new(FileKeyValueStore::new(&self.config.storage_path)),
        };
        let gateway = StorageGateway::with_key(store, self.config.storage_key.clone());

        let mut notes = NoteStore::new(gateway);
        if let Some(ids) = self.ids {
            notes = notes.with_id_generator(ids);
        }
        if let Some(clock) = self.clock {
            notes = notes.with_clock(clock);
        }

        tracing::debug!(
            api = %self.config.api_base_url,
            storage = %self.config.storage_path.display(),
            "console built"
        );
        Ok(ViewController::new(notes, tasks, renderer))
    }
}
