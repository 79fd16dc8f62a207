//! Core types: Note, NoteId, NoteCollection, pagination, relative time

mod collection;
mod note;
mod note_id;
mod page;
mod time_ago;

pub use collection::{Neighbors, NoteCollection};
pub use note::Note;
pub use note_id::{NoteId, ParseNoteIdError};
pub use page::{Page, paginate};
pub use time_ago::{time_ago, time_ago_secs};
