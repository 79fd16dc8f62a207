//! Builder for test notes with sensible defaults.

#![allow(dead_code)]

use marginalia::domain::{Note, NoteId};

/// Builder for a note plus the ID it should be stored under.
#[derive(Debug, Clone)]
pub struct TestNote {
    id: NoteId,
    note: Note,
}

impl TestNote {
    /// Creates a note with the given title, stored under `id`.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: NoteId::from_secs(id),
            note: Note {
                title: title.into(),
                ..Note::default()
            },
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.note.url = url.into();
        self
    }

    pub fn quote(mut self, quote: impl Into<String>) -> Self {
        self.note.quote = quote.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.note.note = body.into();
        self
    }

    pub fn note_id(&self) -> NoteId {
        self.id
    }

    pub fn to_note(&self) -> Note {
        self.note.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_builder_fluent() {
        let note = TestNote::new(1_700_000_000, "Rust book")
            .url("https://doc.rust-lang.org/book/")
            .quote("ownership")
            .body("chapter 4");

        assert_eq!(note.note_id().to_string(), "1700000000");
        let note = note.to_note();
        assert_eq!(note.title, "Rust book");
        assert_eq!(note.url, "https://doc.rust-lang.org/book/");
        assert_eq!(note.quote, "ownership");
        assert_eq!(note.note, "chapter 4");
    }
}
