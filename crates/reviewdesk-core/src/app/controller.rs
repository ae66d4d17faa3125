//! ViewController - 画面イベントと NoteStore / TaskSource をつなぐ
//!
//! # 学習ポイント
//! - シングルスレッド前提の interior mutability（RefCell + `&self` ハンドラ）
//! - await をまたいで borrow を持たない
//! - Drop ガードによる「必ず実行される後始末」（finally 相当）
//!
//! # 並行性
//! ハンドラは `&self` なので、再取得を 2 本同時に走らせられる。
//! 重複リクエストは抑止しない。結果は決着した順に反映されるため、古い
//! レスポンスが新しい描画を上書きすることがある（既知の競合として残している）。

use std::cell::{Ref, RefCell};
use std::sync::Arc;

use super::note_store::NoteStore;
use super::render::{
    FETCH_FAILED_MESSAGE, NOTE_SAVED_MESSAGE, counter_for, note_error_message, task_summary,
};
use crate::domain::{
    FetchError, Feedback, Note, NoteError, NoteId, RefreshState, StatusFilter, Task,
};
use crate::ports::{Renderer, TaskSource};

/// 画面から届くイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// 再取得ボタンのクリック
    RefreshClicked,
    /// ステータス絞り込みセレクトの変更（空文字は絞り込みなし）
    FilterChanged(String),
    /// メモ入力欄の input（入力欄の現在値）
    NoteInput(String),
    /// メモフォームの submit
    NoteSubmitted,
    /// メモごとの削除ボタン
    NoteDeleteClicked(NoteId),
}

/// 永続化しない画面状態
#[derive(Debug, Default)]
struct UiState {
    refresh: RefreshState,
    filter: StatusFilter,
    /// メモ入力欄（textarea）の現在値
    note_input: String,
    /// 最後に取得できたタスク一覧
    tasks: Vec<Task>,
}

pub struct ViewController<R> {
    notes: RefCell<NoteStore>,
    tasks: Arc<dyn TaskSource>,
    renderer: RefCell<R>,
    ui: RefCell<UiState>,
}

impl<R: Renderer> ViewController<R> {
    pub fn new(notes: NoteStore, tasks: Arc<dyn TaskSource>, renderer: R) -> Self {
        Self {
            notes: RefCell::new(notes),
            tasks,
            renderer: RefCell::new(renderer),
            ui: RefCell::new(UiState::default()),
        }
    }

    /// 起動処理
    ///
    /// 1. 保存済みメモを復元して描画
    /// 2. 入力欄の初期値からカウンターを表示
    /// 3. 再取得ボタンを待機状態で表示
    ///
    /// タスク一覧はここでは取得しない（ユーザー操作を待つ）。
    pub fn start(&self, initial_input: &str) {
        {
            let mut notes = self.notes.borrow_mut();
            let hydrated = notes.hydrate();
            self.renderer.borrow_mut().render_notes(hydrated);
        }
        self.ui.borrow_mut().note_input = initial_input.to_string();

        let mut renderer = self.renderer.borrow_mut();
        renderer.set_counter(counter_for(initial_input));
        renderer.set_refresh_control(RefreshState::Idle.control());
    }

    /// イベントを対応するハンドラに振り分ける
    pub async fn dispatch(&self, event: UiEvent) {
        match event {
            UiEvent::RefreshClicked => self.on_refresh_click().await,
            UiEvent::FilterChanged(selection) => self.on_filter_change(&selection).await,
            UiEvent::NoteInput(value) => self.on_note_input(&value),
            UiEvent::NoteSubmitted => {
                // 検証エラーはステータス行に表示済み
                self.on_note_submit().ok();
            }
            UiEvent::NoteDeleteClicked(id) => {
                self.on_note_delete(&id);
            }
        }
    }

    /// 入力のたびに文字数カウンターを更新
    pub fn on_note_input(&self, value: &str) {
        self.ui.borrow_mut().note_input = value.to_string();
        self.renderer.borrow_mut().set_counter(counter_for(value));
    }

    /// メモの保存
    ///
    /// 検証エラーならメッセージを出すだけで、入力欄もカウンターもそのまま。
    pub fn on_note_submit(&self) -> Result<Note, NoteError> {
        let input = self.ui.borrow().note_input.clone();
        let added = self.notes.borrow_mut().add(&input);

        match added {
            Ok(note) => {
                self.ui.borrow_mut().note_input.clear();
                let notes = self.notes.borrow();
                let mut renderer = self.renderer.borrow_mut();
                renderer.render_notes(notes.list());
                renderer.clear_note_input();
                renderer.set_counter(counter_for(""));
                renderer.show_feedback(&Feedback::info(NOTE_SAVED_MESSAGE));
                Ok(note)
            }
            Err(e) => {
                tracing::debug!(error = %e, "note rejected");
                self.feedback(Feedback::error(note_error_message(&e)));
                Err(e)
            }
        }
    }

    /// メモの削除（存在しない id なら何もしない）
    pub fn on_note_delete(&self, id: &NoteId) -> bool {
        let removed = self.notes.borrow_mut().remove(id);
        let notes = self.notes.borrow();
        self.renderer.borrow_mut().render_notes(notes.list());
        removed
    }

    /// 再取得ボタン。失敗はステータス行とログに出るので結果は捨てる
    pub async fn on_refresh_click(&self) {
        self.refresh_tasks().await.ok();
    }

    /// 絞り込みを変えて再取得
    pub async fn on_filter_change(&self, selection: &str) {
        self.ui.borrow_mut().filter = StatusFilter::from_selection(selection);
        self.refresh_tasks().await.ok();
    }

    /// タスクを再取得して描画する
    ///
    /// 成功: 一覧を置き換えて件数を表示。失敗: 一覧は前回のまま、エラーを表示。
    /// どちらの場合も（future が drop された場合も）ボタンは待機状態に戻る。
    pub async fn refresh_tasks(&self) -> Result<usize, FetchError> {
        let filter = self.ui.borrow().filter.clone();
        let _loading = LoadingGuard::enter(self);

        let result = self.tasks.fetch(&filter).await;
        match result {
            Ok(tasks) => {
                let count = tasks.len();
                self.renderer.borrow_mut().render_tasks(&tasks, &filter);
                self.ui.borrow_mut().tasks = tasks;
                self.feedback(Feedback::info(task_summary(count, &filter)));
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, status = filter.as_query(), "failed to refresh tasks");
                self.feedback(Feedback::error(FETCH_FAILED_MESSAGE));
                Err(e)
            }
        }
    }

    pub fn renderer(&self) -> Ref<'_, R> {
        self.renderer.borrow()
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.ui.borrow().refresh
    }

    pub fn filter(&self) -> StatusFilter {
        self.ui.borrow().filter.clone()
    }

    pub fn note_input(&self) -> String {
        self.ui.borrow().note_input.clone()
    }

    /// 最後に取得できたタスク一覧
    pub fn tasks(&self) -> Vec<Task> {
        self.ui.borrow().tasks.clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.notes.borrow().list().to_vec()
    }

    fn feedback(&self, feedback: Feedback) {
        self.renderer.borrow_mut().show_feedback(&feedback);
    }

    fn set_refresh_state(&self, state: RefreshState) {
        self.ui.borrow_mut().refresh = state;
        self.renderer.borrow_mut().set_refresh_control(state.control());
    }
}

/// 再取得中の間だけ生きるガード
///
/// 作成時に Loading へ、drop 時に Idle へ戻す。
struct LoadingGuard<'a, R: Renderer> {
    controller: &'a ViewController<R>,
}

impl<'a, R: Renderer> LoadingGuard<'a, R> {
    fn enter(controller: &'a ViewController<R>) -> Self {
        controller.set_refresh_state(RefreshState::Loading);
        Self { controller }
    }
}

impl<R: Renderer> Drop for LoadingGuard<'_, R> {
    fn drop(&mut self) {
        // panic 中に borrow が残っていても二重 panic にしない
        let idle = RefreshState::Idle;
        if let Ok(mut ui) = self.controller.ui.try_borrow_mut() {
            ui.refresh = idle;
        }
        if let Ok(mut renderer) = self.controller.renderer.try_borrow_mut() {
            renderer.set_refresh_control(idle.control());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::storage::{DEFAULT_STORAGE_KEY, StorageGateway};
    use crate::domain::{CounterDisplay, REFRESH_LABEL, REFRESH_LOADING_LABEL, RefreshControl};
    use crate::impls::InMemoryKeyValueStore;
    use crate::ports::KeyValueStore;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    /// 呼び出しを記録するだけの Renderer
    #[derive(Debug, Default)]
    struct RecordingRenderer {
        notes: Vec<Note>,
        note_renders: usize,
        task_renders: Vec<(Vec<Task>, StatusFilter)>,
        controls: Vec<RefreshControl>,
        counter: Option<CounterDisplay>,
        cleared_inputs: usize,
        feedback: Vec<Feedback>,
    }

    impl RecordingRenderer {
        fn last_feedback(&self) -> Option<&Feedback> {
            self.feedback.last()
        }

        fn last_control(&self) -> Option<RefreshControl> {
            self.controls.last().copied()
        }
    }

    impl Renderer for RecordingRenderer {
        fn render_notes(&mut self, notes: &[Note]) {
            self.notes = notes.to_vec();
            self.note_renders += 1;
        }

        fn render_tasks(&mut self, tasks: &[Task], filter: &StatusFilter) {
            self.task_renders.push((tasks.to_vec(), filter.clone()));
        }

        fn set_refresh_control(&mut self, control: RefreshControl) {
            self.controls.push(control);
        }

        fn set_counter(&mut self, counter: CounterDisplay) {
            self.counter = Some(counter);
        }

        fn clear_note_input(&mut self) {
            self.cleared_inputs += 1;
        }

        fn show_feedback(&mut self, feedback: &Feedback) {
            self.feedback.push(feedback.clone());
        }
    }

    /// 決まった結果を順番に返す TaskSource
    #[derive(Default)]
    struct ScriptedSource {
        results: Mutex<VecDeque<Result<Vec<Task>, FetchError>>>,
        filters: Mutex<Vec<StatusFilter>>,
    }

    impl ScriptedSource {
        fn new(results: Vec<Result<Vec<Task>, FetchError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
                filters: Mutex::new(Vec::new()),
            }
        }

        fn filters(&self) -> Vec<StatusFilter> {
            self.filters.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TaskSource for ScriptedSource {
        async fn fetch(&self, filter: &StatusFilter) -> Result<Vec<Task>, FetchError> {
            self.filters.lock().unwrap().push(filter.clone());
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Network("offline".to_string())))
        }
    }

    /// テスト側が結果を送るまで待つ TaskSource
    #[derive(Default)]
    struct GatedSource {
        gates: Mutex<VecDeque<oneshot::Receiver<Result<Vec<Task>, FetchError>>>>,
        filters: Mutex<Vec<StatusFilter>>,
    }

    impl GatedSource {
        fn new(gates: Vec<oneshot::Receiver<Result<Vec<Task>, FetchError>>>) -> Self {
            Self {
                gates: Mutex::new(gates.into()),
                filters: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.filters.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TaskSource for GatedSource {
        async fn fetch(&self, filter: &StatusFilter) -> Result<Vec<Task>, FetchError> {
            let gate = {
                self.filters.lock().unwrap().push(filter.clone());
                self.gates.lock().unwrap().pop_front()
            };
            match gate {
                Some(gate) => gate
                    .await
                    .unwrap_or_else(|_| Err(FetchError::Network("gate closed".to_string()))),
                None => Err(FetchError::Network("no gate".to_string())),
            }
        }
    }

    fn task(title: &str, status: &str) -> Task {
        Task {
            title: title.to_string(),
            owner: "Riley".to_string(),
            status: status.to_string(),
            url: format!("/pr/{title}/"),
        }
    }

    fn controller_with(
        kv: &InMemoryKeyValueStore,
        source: Arc<dyn TaskSource>,
    ) -> ViewController<RecordingRenderer> {
        let notes = NoteStore::new(StorageGateway::new(kv.clone()));
        ViewController::new(notes, source, RecordingRenderer::default())
    }

    async fn wait_until(mut done: impl FnMut() -> bool) {
        while !done() {
            tokio::task::yield_now().await;
        }
    }

    #[test]
    fn start_hydrates_notes_and_initializes_counter() {
        let kv = InMemoryKeyValueStore::new();
        {
            let mut store = NoteStore::new(StorageGateway::new(kv.clone()));
            store.add("saved earlier").unwrap();
        }

        let controller = controller_with(&kv, Arc::new(ScriptedSource::default()));
        controller.start("  draft  ");

        let renderer = controller.renderer();
        assert_eq!(renderer.notes.len(), 1);
        assert_eq!(renderer.notes[0].text, "saved earlier");
        assert_eq!(renderer.counter.unwrap().to_string(), "5/220");
        assert_eq!(renderer.last_control(), Some(RefreshState::Idle.control()));
        // 起動時にタスクは取りに行かない
        assert!(renderer.task_renders.is_empty());
        assert_eq!(controller.note_input(), "  draft  ");
    }

    #[test]
    fn start_with_corrupt_storage_renders_empty_log() {
        let kv = InMemoryKeyValueStore::new();
        kv.set(DEFAULT_STORAGE_KEY, "not json").unwrap();

        let controller = controller_with(&kv, Arc::new(ScriptedSource::default()));
        controller.start("");

        assert_eq!(controller.renderer().note_renders, 1);
        assert!(controller.renderer().notes.is_empty());
    }

    #[test]
    fn submit_saves_note_and_resets_input() {
        let kv = InMemoryKeyValueStore::new();
        let controller = controller_with(&kv, Arc::new(ScriptedSource::default()));
        controller.start("");

        controller.on_note_input("Review LGTM");
        assert_eq!(controller.renderer().counter.unwrap().to_string(), "11/220");

        let note = controller.on_note_submit().unwrap();

        let notes = controller.notes();
        assert_eq!(notes[0].text, "Review LGTM");
        assert_eq!(notes[0].id, note.id);
        assert!(!note.id.as_str().is_empty());

        let renderer = controller.renderer();
        assert_eq!(renderer.notes[0].text, "Review LGTM");
        assert_eq!(renderer.counter.unwrap().to_string(), "0/220");
        assert_eq!(renderer.cleared_inputs, 1);
        assert_eq!(renderer.last_feedback(), Some(&Feedback::info(NOTE_SAVED_MESSAGE)));
        assert_eq!(controller.note_input(), "");
    }

    #[test]
    fn invalid_submit_shows_error_and_changes_nothing() {
        let kv = InMemoryKeyValueStore::new();
        let controller = controller_with(&kv, Arc::new(ScriptedSource::default()));
        controller.start("");

        controller.on_note_input("   ");
        assert_eq!(controller.on_note_submit(), Err(NoteError::EmptyNote));
        let feedback = controller.renderer().last_feedback().cloned().unwrap();
        assert!(feedback.is_error);
        assert_eq!(feedback.message, "メモが空です。内容を入力してください。");

        let long = "x".repeat(221);
        controller.on_note_input(&long);
        assert!(matches!(
            controller.on_note_submit(),
            Err(NoteError::TooLong { .. })
        ));

        let renderer = controller.renderer();
        assert_eq!(
            renderer.last_feedback(),
            Some(&Feedback::error("メモは220文字以内にしてください。"))
        );
        // 入力もカウンターもそのまま、メモは増えない
        assert_eq!(renderer.cleared_inputs, 0);
        assert_eq!(renderer.counter.unwrap().length, 221);
        assert!(renderer.counter.unwrap().warning);
        assert_eq!(renderer.note_renders, 1);
        assert_eq!(controller.note_input(), long);
        assert!(controller.notes().is_empty());
    }

    #[test]
    fn delete_removes_note_and_rerenders() {
        let kv = InMemoryKeyValueStore::new();
        let controller = controller_with(&kv, Arc::new(ScriptedSource::default()));
        controller.start("");

        controller.on_note_input("keep");
        controller.on_note_submit().unwrap();
        controller.on_note_input("drop");
        let dropped = controller.on_note_submit().unwrap();

        assert!(controller.on_note_delete(&dropped.id));
        assert!(!controller.on_note_delete(&NoteId::new("missing")));

        let renderer = controller.renderer();
        assert_eq!(renderer.notes.len(), 1);
        assert_eq!(renderer.notes[0].text, "keep");
    }

    #[tokio::test]
    async fn successful_refresh_renders_tasks_and_summary() {
        let kv = InMemoryKeyValueStore::new();
        let source = Arc::new(ScriptedSource::new(vec![Ok(vec![
            task("101", "open"),
            task("102", "open"),
        ])]));
        let controller = controller_with(&kv, source.clone());
        controller.start("");

        controller.dispatch(UiEvent::FilterChanged("open".to_string())).await;

        assert_eq!(source.filters(), vec![StatusFilter::from("open")]);
        assert_eq!(controller.tasks().len(), 2);

        let renderer = controller.renderer();
        assert_eq!(renderer.task_renders.len(), 1);
        assert_eq!(renderer.task_renders[0].1, StatusFilter::from("open"));
        assert_eq!(renderer.last_feedback(), Some(&Feedback::info("2件を表示中（open）")));

        // Idle → Loading → Idle
        let labels: Vec<&str> = renderer.controls.iter().map(|c| c.label).collect();
        assert_eq!(labels, vec![REFRESH_LABEL, REFRESH_LOADING_LABEL, REFRESH_LABEL]);
        assert_eq!(controller.refresh_state(), RefreshState::Idle);
    }

    #[tokio::test]
    async fn clearing_the_filter_fetches_everything() {
        let kv = InMemoryKeyValueStore::new();
        let source = Arc::new(ScriptedSource::new(vec![Ok(vec![]), Ok(vec![])]));
        let controller = controller_with(&kv, source.clone());
        controller.start("");

        controller.on_filter_change("open").await;
        controller.on_filter_change("").await;

        assert_eq!(source.filters(), vec![StatusFilter::from("open"), StatusFilter::all()]);
        assert_eq!(
            controller.renderer().last_feedback(),
            Some(&Feedback::info("該当するタスクはありません"))
        );
    }

    #[tokio::test]
    async fn offline_refresh_keeps_stale_tasks_and_restores_control() {
        let kv = InMemoryKeyValueStore::new();
        let source = Arc::new(ScriptedSource::new(vec![
            Ok(vec![task("101", "open")]),
            Err(FetchError::Network("offline".to_string())),
            Err(FetchError::Network("offline".to_string())),
        ]));
        let controller = controller_with(&kv, source.clone());
        controller.start("");
        controller.on_refresh_click().await;
        let before = controller.tasks();

        controller.dispatch(UiEvent::FilterChanged("merged".to_string())).await;
        controller.dispatch(UiEvent::RefreshClicked).await;

        assert_eq!(
            source.filters(),
            vec![
                StatusFilter::all(),
                StatusFilter::from("merged"),
                StatusFilter::from("merged")
            ]
        );
        assert_eq!(controller.tasks(), before);

        let renderer = controller.renderer();
        assert_eq!(renderer.task_renders.len(), 1);
        assert_eq!(
            renderer.last_control(),
            Some(RefreshControl {
                enabled: true,
                label: REFRESH_LABEL
            })
        );
        assert_eq!(renderer.last_feedback(), Some(&Feedback::error(FETCH_FAILED_MESSAGE)));
        assert_eq!(controller.refresh_state(), RefreshState::Idle);
    }

    #[tokio::test]
    async fn api_error_is_returned_and_shown() {
        let kv = InMemoryKeyValueStore::new();
        let source = Arc::new(ScriptedSource::new(vec![Err(FetchError::Api {
            status: 400,
            detail: Some("Unknown status 'x'".to_string()),
        })]));
        let controller = controller_with(&kv, source);
        controller.start("");

        let err = controller.refresh_tasks().await.unwrap_err();

        assert!(err.to_string().contains("Unknown status"));
        assert!(controller.renderer().last_feedback().unwrap().is_error);
        assert_eq!(controller.refresh_state(), RefreshState::Idle);
    }

    #[tokio::test]
    async fn control_is_disabled_while_fetch_is_in_flight() {
        let (tx, rx) = oneshot::channel();
        let source = Arc::new(GatedSource::new(vec![rx]));
        let controller = Rc::new(controller_with(&InMemoryKeyValueStore::new(), source.clone()));
        controller.start("");

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let c = controller.clone();
                let handle = tokio::task::spawn_local(async move { c.on_refresh_click().await });
                wait_until(|| source.calls() == 1).await;

                assert_eq!(controller.refresh_state(), RefreshState::Loading);
                assert_eq!(
                    controller.renderer().last_control(),
                    Some(RefreshState::Loading.control())
                );

                tx.send(Ok(vec![task("101", "open")])).unwrap();
                handle.await.unwrap();
            })
            .await;

        assert_eq!(controller.refresh_state(), RefreshState::Idle);
        assert_eq!(controller.tasks().len(), 1);
    }

    #[tokio::test]
    async fn dropping_an_in_flight_refresh_restores_control() {
        let (_tx, rx) = oneshot::channel();
        let source = Arc::new(GatedSource::new(vec![rx]));
        let controller = Rc::new(controller_with(&InMemoryKeyValueStore::new(), source.clone()));
        controller.start("");

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let c = controller.clone();
                let handle = tokio::task::spawn_local(async move { c.on_refresh_click().await });
                wait_until(|| source.calls() == 1).await;
                assert_eq!(controller.refresh_state(), RefreshState::Loading);

                handle.abort();
                assert!(handle.await.unwrap_err().is_cancelled());
            })
            .await;

        assert_eq!(controller.refresh_state(), RefreshState::Idle);
        assert_eq!(
            controller.renderer().last_control(),
            Some(RefreshState::Idle.control())
        );
    }

    #[tokio::test]
    async fn overlapping_refreshes_apply_in_settle_order() {
        let (tx_first, rx_first) = oneshot::channel();
        let (tx_second, rx_second) = oneshot::channel();
        let source = Arc::new(GatedSource::new(vec![rx_first, rx_second]));
        let controller = Rc::new(controller_with(&InMemoryKeyValueStore::new(), source.clone()));
        controller.start("");

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let c = controller.clone();
                let first =
                    tokio::task::spawn_local(async move { c.on_filter_change("open").await });
                wait_until(|| source.calls() == 1).await;

                let c = controller.clone();
                let second = tokio::task::spawn_local(async move { c.on_refresh_click().await });
                wait_until(|| source.calls() == 2).await;

                // 新しい方が先に返る
                tx_second.send(Ok(vec![task("newer", "open")])).unwrap();
                second.await.unwrap();
                assert_eq!(controller.tasks()[0].title, "newer");
                // 1 本目がまだ走っていてもボタンは戻っている
                assert_eq!(controller.refresh_state(), RefreshState::Idle);

                // 古いレスポンスが後から届いて上書きする
                tx_first.send(Ok(vec![task("stale", "open")])).unwrap();
                first.await.unwrap();
            })
            .await;

        assert_eq!(controller.tasks()[0].title, "stale");
        assert_eq!(controller.renderer().task_renders.len(), 2);
    }

    #[tokio::test]
    async fn dispatch_routes_note_events() {
        let kv = InMemoryKeyValueStore::new();
        let controller = controller_with(&kv, Arc::new(ScriptedSource::default()));
        controller.start("");

        controller.dispatch(UiEvent::NoteInput("via dispatch".to_string())).await;
        controller.dispatch(UiEvent::NoteSubmitted).await;
        let id = controller.notes()[0].id.clone();
        assert_eq!(controller.notes()[0].text, "via dispatch");

        controller.dispatch(UiEvent::NoteDeleteClicked(id)).await;
        assert!(controller.notes().is_empty());
        // 削除も永続化される
        assert_eq!(kv.get(DEFAULT_STORAGE_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn dispatched_failures_are_still_shown() {
        let kv = InMemoryKeyValueStore::new();
        let controller = controller_with(&kv, Arc::new(ScriptedSource::default()));
        controller.start("");

        controller.dispatch(UiEvent::NoteInput("   ".to_string())).await;
        controller.dispatch(UiEvent::NoteSubmitted).await;
        assert_eq!(
            controller.renderer().last_feedback(),
            Some(&Feedback::error("メモが空です。内容を入力してください。"))
        );
        assert!(controller.notes().is_empty());

        // ScriptedSource は結果が尽きると Network エラーを返す
        controller.dispatch(UiEvent::FilterChanged("open".to_string())).await;
        assert_eq!(
            controller.renderer().last_feedback(),
            Some(&Feedback::error(FETCH_FAILED_MESSAGE))
        );
        controller.dispatch(UiEvent::RefreshClicked).await;
        assert_eq!(controller.renderer().feedback.len(), 3);
        assert_eq!(controller.refresh_state(), RefreshState::Idle);
    }
}
