//! TaskSource port - タスク一覧 API
//!
//! 本番実装は `impls::HttpTaskClient`。テストではスクリプト化した実装に差し替える。

use async_trait::async_trait;

use crate::domain::{FetchError, StatusFilter, Task};

/// TaskSource はタスク一覧を取得する
///
/// # 契約
/// - 絞り込みが空なら全件、そうでなければ `status` で絞り込む
/// - 成功時はサーバーの並び順をそのまま返す
/// - 通信/デコード失敗は `FetchError::Network`、2xx 以外は `FetchError::Api`
#[async_trait]
pub trait TaskSource: Send + Sync {
    async fn fetch(&self, filter: &StatusFilter) -> Result<Vec<Task>, FetchError>;
}
