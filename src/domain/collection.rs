//! The full note collection, always iterated newest first.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::{Note, NoteId};

/// Every note, keyed by ID.
///
/// Iteration order is descending by ID (newest first). This is the order the
/// store persists and the order every listing presents, so callers never sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteCollection {
    notes: BTreeMap<NoteId, Note>,
}

/// The IDs adjacent to a note in newest-first order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Neighbors {
    /// The next-older note.
    pub previous: Option<NoteId>,
    /// The next-newer note.
    pub next: Option<NoteId>,
}

impl NoteCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn contains(&self, id: &NoteId) -> bool {
        self.notes.contains_key(id)
    }

    /// Sets the note at `id`, returning whatever was there before.
    pub fn insert(&mut self, id: NoteId, note: Note) -> Option<Note> {
        self.notes.insert(id, note)
    }

    pub fn remove(&mut self, id: &NoteId) -> Option<Note> {
        self.notes.remove(id)
    }

    /// Iterates newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&NoteId, &Note)> + '_ {
        self.notes.iter().rev()
    }

    /// Returns the newest note's ID.
    pub fn newest_id(&self) -> Option<NoteId> {
        self.notes.keys().next_back().copied()
    }

    /// Returns up to `limit` notes, newest first.
    pub fn latest(&self, limit: usize) -> Vec<(&NoteId, &Note)> {
        self.iter().take(limit).collect()
    }

    /// Case-insensitive substring search across url, title, quote and note.
    ///
    /// An empty query matches everything. Results keep collection order.
    pub fn search(&self, query: &str) -> Vec<(&NoteId, &Note)> {
        if query.is_empty() {
            return self.iter().collect();
        }
        let needle = query.to_lowercase();
        self.iter()
            .filter(|(_, note)| note.search_text().contains(&needle))
            .collect()
    }

    /// Returns the IDs on either side of `id`.
    ///
    /// Both are `None` when `id` isn't in the collection.
    pub fn neighbors(&self, id: &NoteId) -> Neighbors {
        if !self.notes.contains_key(id) {
            return Neighbors::default();
        }
        Neighbors {
            previous: self.notes.range(..id).next_back().map(|(k, _)| *k),
            next: self
                .notes
                .range((std::ops::Bound::Excluded(id), std::ops::Bound::Unbounded))
                .next()
                .map(|(k, _)| *k),
        }
    }
}

impl FromIterator<(NoteId, Note)> for NoteCollection {
    fn from_iter<I: IntoIterator<Item = (NoteId, Note)>>(iter: I) -> Self {
        Self {
            notes: iter.into_iter().collect(),
        }
    }
}

impl Serialize for NoteCollection {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.notes.len()))?;
        for (id, note) in self.iter() {
            map.serialize_entry(id, note)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for NoteCollection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CollectionVisitor;

        impl<'de> Visitor<'de> for CollectionVisitor {
            type Value = NoteCollection;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of note ids to notes")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut notes = BTreeMap::new();
                while let Some((id, note)) = access.next_entry::<NoteId, Note>()? {
                    if notes.insert(id, note).is_some() {
                        return Err(A::Error::custom(format!("duplicate note id {id}")));
                    }
                }
                Ok(NoteCollection { notes })
            }
        }

        deserializer.deserialize_map(CollectionVisitor)
    }
}
