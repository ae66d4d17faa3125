//! State - 画面上の一時状態
//!
//! 永続化しない状態（再取得ボタンの状態、ステータス表示）をまとめる。

/// 再取得ボタンのラベル（待機中）
pub const REFRESH_LABEL: &str = "APIから再取得";

/// 再取得ボタンのラベル（取得中）
pub const REFRESH_LOADING_LABEL: &str = "再取得中...";

/// RefreshState は再取得コントロールの状態
///
/// # 状態遷移
/// - Idle → Loading: 再取得クリック、または絞り込み変更
/// - Loading → Idle: fetch が終わったら必ず（成功・失敗どちらでも）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefreshState {
    #[default]
    Idle,
    Loading,
}

impl RefreshState {
    /// この状態でのボタン表示
    pub fn control(self) -> RefreshControl {
        match self {
            RefreshState::Idle => RefreshControl {
                enabled: true,
                label: REFRESH_LABEL,
            },
            RefreshState::Loading => RefreshControl {
                enabled: false,
                label: REFRESH_LOADING_LABEL,
            },
        }
    }
}

/// 再取得ボタンの見た目
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshControl {
    pub enabled: bool,
    pub label: &'static str,
}

/// ステータス行に出すメッセージ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub is_error: bool,
}

impl Feedback {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

/// 文字数カウンターの表示
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterDisplay {
    pub length: usize,
    pub max: usize,
    /// 上限の 9 割を超えたら警告表示
    pub warning: bool,
}

impl std::fmt::Display for CounterDisplay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.length, self.max)
    }
}
