//! Isolated test environment with a temp data file.

#![allow(dead_code)]

use super::{MarginaliaCommand, TestNote};
use marginalia::domain::NoteCollection;
use marginalia::infra::NoteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary `notes.json`.
///
/// The directory is removed when the env is dropped.
pub struct TestEnv {
    _temp_dir: TempDir,
    data_file: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_file = temp_dir.path().join("notes.json");
        Self {
            _temp_dir: temp_dir,
            data_file,
        }
    }

    pub fn dir(&self) -> &Path {
        self._temp_dir.path()
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    pub fn store(&self) -> NoteStore {
        NoteStore::new(&self.data_file)
    }

    /// Adds notes to the data file, keeping whatever is already there.
    pub fn add_notes(&self, notes: &[TestNote]) {
        let store = self.store();
        let mut collection = store.load();
        for note in notes {
            collection.insert(note.note_id(), note.to_note());
        }
        store.save(&collection).expect("Failed to save test notes");
    }

    /// Reads the data file back through the store.
    pub fn load(&self) -> NoteCollection {
        self.store().load()
    }

    /// Creates a command pointed at this env's data file and an absent config.
    pub fn cmd(&self) -> MarginaliaCommand {
        MarginaliaCommand::new()
            .config(&crate::common::missing_config(self.dir()))
            .data(&self.data_file)
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
