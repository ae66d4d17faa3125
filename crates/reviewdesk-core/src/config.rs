//! ConsoleConfig - 起動時の設定
//!
//! TOML ファイルから読み込む。項目はすべて省略可能で、省略時は既定値。

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 設定読み込みエラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// タスク API のベース URL（`/api/tasks/` はこの下）
    pub api_base_url: String,
    /// メモを保存する JSON ファイル
    pub storage_path: PathBuf,
    /// メモ配列を保存するキー
    pub storage_key: String,
    pub request_timeout_ms: u64,
    /// tracing-subscriber の EnvFilter 書式
    pub log_filter: String,
    /// 起動時にメモ入力欄に入っている文字列
    pub initial_note: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            storage_path: PathBuf::from("reviewdesk-notes.json"),
            storage_key: crate::app::storage::DEFAULT_STORAGE_KEY.to_string(),
            request_timeout_ms: 10_000,
            log_filter: "info".to_string(),
            initial_note: String::new(),
        }
    }
}

impl ConsoleConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// ファイルがあれば読み、なければ既定値
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
