//! NoteStore - メモ一覧の正本（メモリ上）
//!
//! # 不変条件
//! - 新しい順に並ぶ
//! - 件数は NOTE_CAPACITY 以下（追加時に古いものから捨てる）
//! - id は一覧内で一意
//!
//! 変更のたびに StorageGateway へ書き出す。書き出しの成否は状態に影響しない。

use std::collections::HashSet;

use super::storage::StorageGateway;
use crate::domain::{NOTE_CAPACITY, Note, NoteError, NoteId, NoteText};
use crate::ports::{Clock, IdGenerator, SystemClock, select_id_generator};

pub struct NoteStore {
    gateway: StorageGateway,
    ids: Box<dyn IdGenerator>,
    clock: Box<dyn Clock>,
    notes: Vec<Note>,
}

impl NoteStore {
    /// SystemClock と、環境に合わせて選んだ ID 戦略で作る
    pub fn new(gateway: StorageGateway) -> Self {
        Self {
            gateway,
            ids: select_id_generator(SystemClock),
            clock: Box::new(SystemClock),
            notes: Vec::new(),
        }
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// 保存済みのメモを読み込む（起動時に 1 回）
    ///
    /// 外から書かれたデータでも不変条件を満たすように、本文が空または
    /// 長すぎるものを捨て、重複 id は先に出てきた方（新しい方）を残し、
    /// 件数を上限で切る。
    pub fn hydrate(&mut self) -> &[Note] {
        let loaded = self.gateway.read();
        let loaded_len = loaded.len();

        let mut seen = HashSet::new();
        let mut notes: Vec<Note> = loaded
            .into_iter()
            .filter(|note| NoteText::parse(&note.text).is_ok())
            .filter(|note| seen.insert(note.id.clone()))
            .collect();
        notes.truncate(NOTE_CAPACITY);

        if notes.len() != loaded_len {
            tracing::warn!(
                loaded = loaded_len,
                kept = notes.len(),
                "dropped invalid, duplicate or excess notes during hydration"
            );
        }
        tracing::debug!(count = notes.len(), "notes hydrated");

        self.notes = notes;
        &self.notes
    }

    /// メモを追加する
    ///
    /// 入力は trim してから検証する。成功すると先頭に入り、上限を超えた
    /// 古いメモは捨てられる。
    pub fn add(&mut self, raw_text: &str) -> Result<Note, NoteError> {
        let text = NoteText::parse(raw_text)?;
        let note = Note::new(self.fresh_id(), text, self.clock.now());

        self.notes.insert(0, note.clone());
        self.notes.truncate(NOTE_CAPACITY);
        self.gateway.write(&self.notes);

        tracing::info!(id = %note.id, total = self.notes.len(), "note added");
        Ok(note)
    }

    /// メモを削除する（存在しない id は何もしない）
    ///
    /// 残りの並び順は変わらない。削除したかどうかを返す。
    pub fn remove(&mut self, id: &NoteId) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| &note.id != id);
        let removed = self.notes.len() != before;
        self.gateway.write(&self.notes);

        if removed {
            tracing::info!(%id, total = self.notes.len(), "note removed");
        }
        removed
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| &note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn fresh_id(&self) -> NoteId {
        loop {
            let id = self.ids.generate_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
