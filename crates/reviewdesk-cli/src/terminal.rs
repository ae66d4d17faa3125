//! TerminalRenderer - Renderer を端末出力で実装する
//!
//! 領域ごとに「描き直し」をテキストのブロックとして出力する。
//! 書き込みに失敗しても画面の状態は変えず、ログに残すだけ。

use std::fmt::Write as _;
use std::io::{self, Write};

use reviewdesk_core::app::render::{
    NOTES_EMPTY_MESSAGE, note_meta_line, task_meta_line, tasks_empty_message,
};
use reviewdesk_core::domain::{
    CounterDisplay, Feedback, Note, RefreshControl, StatusFilter, Task,
};
use reviewdesk_core::ports::Renderer;

pub struct TerminalRenderer<W> {
    out: W,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }
}

/// メモ一覧のブロック
pub fn notes_block(notes: &[Note]) -> String {
    let mut block = String::from("── メモ ──\n");
    if notes.is_empty() {
        let _ = writeln!(block, "  {NOTES_EMPTY_MESSAGE}");
        return block;
    }
    for note in notes {
        let _ = writeln!(block, "  [{}] {}", note.id, note.text);
        let _ = writeln!(block, "      {}", note_meta_line(&note.created_at));
    }
    block
}

/// タスク一覧のブロック（件数はステータス行に出る）
pub fn tasks_block(tasks: &[Task], filter: &StatusFilter) -> String {
    let mut block = String::from("── タスク ──\n");
    if tasks.is_empty() {
        let _ = writeln!(block, "  {}", tasks_empty_message(filter));
        return block;
    }
    for task in tasks {
        let _ = writeln!(block, "  {} <{}>", task.title, task.url);
        let _ = writeln!(block, "      {}", task_meta_line(task));
    }
    block
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render_notes(&mut self, notes: &[Note]) {
        let block = notes_block(notes);
        self.print(block.trim_end());
    }

    fn render_tasks(&mut self, tasks: &[Task], filter: &StatusFilter) {
        let block = tasks_block(tasks, filter);
        self.print(block.trim_end());
    }

    fn set_refresh_control(&mut self, control: RefreshControl) {
        let marker = if control.enabled { "" } else { " (無効)" };
        self.print(&format!("[{}]{marker}", control.label));
    }

    fn set_counter(&mut self, counter: CounterDisplay) {
        let marker = if counter.warning { " !" } else { "" };
        self.print(&format!("文字数: {counter}{marker}"));
    }

    fn clear_note_input(&mut self) {
        self.print("(入力欄をクリアしました)");
    }

    fn show_feedback(&mut self, feedback: &Feedback) {
        let prefix = if feedback.is_error { "エラー: " } else { "" };
        self.print(&format!("{prefix}{}", feedback.message));
    }
}
