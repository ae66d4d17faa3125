//! Domain model (notes, tasks, UI state, errors).

pub mod errors;
pub mod note;
pub mod state;
pub mod task;

pub use self::errors::{FetchError, NoteError, StorageError};
pub use self::note::{MAX_NOTE_LENGTH, NOTE_CAPACITY, Note, NoteId, NoteText, text_length};
pub use self::state::{
    CounterDisplay, Feedback, REFRESH_LABEL, REFRESH_LOADING_LABEL, RefreshControl, RefreshState,
};
pub use self::task::{StatusFilter, Task};
