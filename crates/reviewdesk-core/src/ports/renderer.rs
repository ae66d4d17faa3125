//! Renderer port - 画面描画
//!
//! ViewController はこの trait 越しにだけ画面を更新する。
//! 表示文字列の組み立ては `app::render` の純粋関数に寄せてある。

use crate::domain::{CounterDisplay, Feedback, Note, RefreshControl, StatusFilter, Task};

/// Renderer は状態を画面に投影する
///
/// 各メソッドは「その領域を丸ごと描き直す」意味を持つ。
pub trait Renderer {
    /// メモ一覧（新しい順）。空なら空状態の案内を出す
    fn render_notes(&mut self, notes: &[Note]);

    /// タスク一覧。空なら絞り込み条件に応じた案内を出す
    fn render_tasks(&mut self, tasks: &[Task], filter: &StatusFilter);

    fn set_refresh_control(&mut self, control: RefreshControl);

    fn set_counter(&mut self, counter: CounterDisplay);

    /// メモ入力欄を空にする
    fn clear_note_input(&mut self);

    fn show_feedback(&mut self, feedback: &Feedback);
}
