//! HttpTaskClient - reqwest によるタスク API クライアント
//!
//! `GET {base_url}/api/tasks/[?status=<value>]` を叩き、結果を
//! `Vec<Task>` か `FetchError` に正規化する。

use async_trait::async_trait;
use std::time::Duration;

use crate::config::ConsoleConfig;
use crate::domain::task::{ErrorBody, TaskListBody};
use crate::domain::{FetchError, StatusFilter, Task};
use crate::ports::TaskSource;

const TASKS_PATH: &str = "/api/tasks/";

pub struct HttpTaskClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskClient {
    /// タイムアウトなしのクライアント
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// リクエストごとのタイムアウト付き
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ConsoleConfig) -> Result<Self, reqwest::Error> {
        Self::with_timeout(&config.api_base_url, config.request_timeout())
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, TASKS_PATH)
    }
}

#[async_trait]
impl TaskSource for HttpTaskClient {
    async fn fetch(&self, filter: &StatusFilter) -> Result<Vec<Task>, FetchError> {
        let url = self.endpoint();
        let mut request = self.client.get(&url);
        if let Some(status) = filter.as_query() {
            request = request.query(&[("status", status)]);
        }
        tracing::debug!(%url, status = filter.as_query(), "fetching tasks");

        let response = request
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            // エラー本文は JSON でなくてもよい。読めたら `error` を添える
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error);
            tracing::warn!(status = status.as_u16(), ?detail, "task API returned an error");
            return Err(FetchError::Api {
                status: status.as_u16(),
                detail,
            });
        }

        let parsed: TaskListBody = serde_json::from_slice(&body)
            .map_err(|e| FetchError::Network(format!("invalid task list body: {e}")))?;
        tracing::debug!(count = parsed.tasks.len(), "tasks fetched");
        Ok(parsed.tasks)
    }
}
