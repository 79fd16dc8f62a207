//! JSON-file note store with whole-collection load/save.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::domain::{Note, NoteCollection, NoteId};
use crate::infra::fs::{FsError, read_file, write_atomic};

/// Errors while persisting the collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to serialize notes: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Fs(#[from] FsError),
}

/// The backing file for the note collection.
///
/// Every read loads the whole file and every write rewrites it. There is no
/// partial access and no locking between processes.
#[derive(Debug, Clone)]
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the whole collection.
    ///
    /// Never fails: a missing file is an empty collection, and an unreadable
    /// file or one that isn't a JSON object is logged at warn level and also
    /// treated as empty. Individual entries that can't be read are skipped
    /// with a warning and the rest are kept.
    pub fn load(&self) -> NoteCollection {
        let contents = match read_file(&self.path) {
            Ok(contents) => contents,
            Err(FsError::NotFound { .. }) => {
                tracing::debug!(path = %self.path.display(), "notes file missing, starting empty");
                return NoteCollection::new();
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "could not read notes file, using an empty collection"
                );
                return NoteCollection::new();
            }
        };

        match parse_notes(&contents) {
            Ok((notes, skipped)) => {
                for entry in &skipped {
                    tracing::warn!(
                        path = %self.path.display(),
                        key = %entry.key,
                        reason = %entry.reason,
                        "skipping unreadable note entry"
                    );
                }
                tracing::debug!(path = %self.path.display(), count = notes.len(), "loaded notes");
                notes
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "notes file is not a JSON object, using an empty collection"
                );
                NoteCollection::new()
            }
        }
    }

    /// Replaces the backing file with `notes`, newest first.
    pub fn save(&self, notes: &NoteCollection) -> Result<(), StoreError> {
        let json = to_pretty_json(notes)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), count = notes.len(), "saved notes");
        Ok(())
    }

    /// Sets a note and saves, using the current time for a fresh ID.
    ///
    /// See [`NoteStore::upsert_at`].
    pub fn upsert(
        &self,
        notes: &mut NoteCollection,
        id: Option<NoteId>,
        note: Note,
    ) -> Result<NoteId, StoreError> {
        self.upsert_at(notes, id, note, Utc::now())
    }

    /// Sets a note and saves.
    ///
    /// Without an ID (or with ID `0`) the note is keyed by `now`. A given ID is
    /// used as-is and replaces whatever is stored there, so two creates within
    /// the same second collide and the second wins.
    pub fn upsert_at(
        &self,
        notes: &mut NoteCollection,
        id: Option<NoteId>,
        note: Note,
        now: DateTime<Utc>,
    ) -> Result<NoteId, StoreError> {
        let id = id
            .filter(|id| id.as_secs() != 0)
            .unwrap_or_else(|| NoteId::from_datetime(now));
        notes.insert(id, note);
        self.save(notes)?;
        Ok(id)
    }

    /// Removes a note and saves. Returns false without touching the file when
    /// the ID isn't present.
    pub fn delete(&self, notes: &mut NoteCollection, id: &NoteId) -> Result<bool, StoreError> {
        if notes.remove(id).is_none() {
            return Ok(false);
        }
        self.save(notes)?;
        Ok(true)
    }
}

/// An entry [`parse_notes`] left out of the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SkippedEntry {
    key: String,
    reason: String,
}

/// Parses the backing file entry by entry.
///
/// Only a document that isn't a JSON object is an error. Entries whose key
/// isn't a note ID or whose value isn't a note are returned as skipped, and
/// the rest of the collection is kept.
fn parse_notes(contents: &str) -> Result<(NoteCollection, Vec<SkippedEntry>), serde_json::Error> {
    let entries: serde_json::Map<String, serde_json::Value> = serde_json::from_str(contents)?;
    let mut notes = NoteCollection::new();
    let mut skipped = Vec::new();

    for (key, value) in entries {
        let id = match key.parse::<NoteId>() {
            Ok(id) => id,
            Err(e) => {
                skipped.push(SkippedEntry {
                    key,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        match serde_json::from_value::<Note>(value) {
            Ok(note) => {
                notes.insert(id, note);
            }
            Err(e) => skipped.push(SkippedEntry {
                key,
                reason: e.to_string(),
            }),
        }
    }
    Ok((notes, skipped))
}

fn to_pretty_json(notes: &NoteCollection) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    notes.serialize(&mut serializer)?;
    Ok(buf)
}

/// A [`NoteStore`] with an in-memory copy of the collection.
///
/// Reads are served from the cache. Writes are serialized, applied to a copy,
/// saved, and only then published; a failed save leaves the cache as it was.
/// Changes made to the file by other processes are invisible until
/// [`CachedStore::reload`].
#[derive(Debug)]
pub struct CachedStore {
    store: NoteStore,
    cache: RwLock<Arc<NoteCollection>>,
    writer: Mutex<()>,
}

impl CachedStore {
    /// Wraps `store`, loading the file once.
    pub fn open(store: NoteStore) -> Self {
        let notes = store.load();
        Self {
            store,
            cache: RwLock::new(Arc::new(notes)),
            writer: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Returns the current collection.
    pub fn snapshot(&self) -> Arc<NoteCollection> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Re-reads the backing file and replaces the cache.
    pub fn reload(&self) -> Arc<NoteCollection> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let notes = Arc::new(self.store.load());
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&notes);
        notes
    }

    pub fn upsert(&self, id: Option<NoteId>, note: Note) -> Result<NoteId, StoreError> {
        self.upsert_at(id, note, Utc::now())
    }

    pub fn upsert_at(
        &self,
        id: Option<NoteId>,
        note: Note,
        now: DateTime<Utc>,
    ) -> Result<NoteId, StoreError> {
        self.write(|store, notes| store.upsert_at(notes, id, note, now))
    }

    pub fn delete(&self, id: &NoteId) -> Result<bool, StoreError> {
        self.write(|store, notes| store.delete(notes, id))
    }

    fn write<T>(
        &self,
        apply: impl FnOnce(&NoteStore, &mut NoteCollection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let _guard = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut notes = NoteCollection::clone(&self.snapshot());
        let result = apply(&self.store, &mut notes)?;
        *self.cache.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(notes);
        Ok(result)
    }
}
