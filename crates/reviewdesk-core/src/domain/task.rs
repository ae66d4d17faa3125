use serde::{Deserialize, Serialize};
use std::fmt;

/// レビュー対象のタスク（外部 API が所有する読み取り専用データ）
///
/// サーバーは `pr_id` など他のフィールドも返すが、ここでは使わないので無視する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub owner: String,
    pub status: String,
    pub url: String,
}

/// ステータス絞り込み条件
///
/// 空文字や未選択は「絞り込みなし」。それ以外は値をそのままクエリに渡す。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StatusFilter(Option<String>);

impl StatusFilter {
    /// 絞り込みなし
    pub fn all() -> Self {
        Self(None)
    }

    /// セレクトボックスの値から作る（空なら絞り込みなし）
    pub fn from_selection(value: &str) -> Self {
        if value.is_empty() {
            Self(None)
        } else {
            Self(Some(value.to_string()))
        }
    }

    /// `status` クエリパラメータに渡す値
    pub fn as_query(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.0.is_some()
    }
}

impl From<&str> for StatusFilter {
    fn from(value: &str) -> Self {
        Self::from_selection(value)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_deref().unwrap_or(""))
    }
}

/// `GET /api/tasks/` の成功レスポンス
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TaskListBody {
    pub tasks: Vec<Task>,
}

/// エラーレスポンス（`error` は任意）
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_means_no_filter() {
        let filter = StatusFilter::from_selection("");
        assert_eq!(filter, StatusFilter::all());
        assert_eq!(filter.as_query(), None);
        assert!(!filter.is_active());
    }

    #[test]
    fn selection_is_kept_verbatim() {
        let filter = StatusFilter::from_selection("レビュー中");
        assert_eq!(filter.as_query(), Some("レビュー中"));
        assert_eq!(filter.to_string(), "レビュー中");
    }

    #[test]
    fn task_ignores_unknown_fields() {
        let raw = r#"{"tasks":[{"pr_id":"101","title":"CI","owner":"Alex","status":"open","url":"/pr/101/"}]}"#;
        let body: TaskListBody = serde_json::from_str(raw).unwrap();
        assert_eq!(body.tasks.len(), 1);
        assert_eq!(body.tasks[0].owner, "Alex");
    }

    #[test]
    fn error_body_tolerates_missing_error_field() {
        let body: ErrorBody = serde_json::from_str(r#"{"allowed_statuses":[]}"#).unwrap();
        assert_eq!(body.error, None);
    }
}
