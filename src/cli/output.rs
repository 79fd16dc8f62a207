//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::{Note, NoteId};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing<'a> {
    pub id: NoteId,
    #[serde(flatten)]
    pub note: &'a Note,
}

impl<'a> NoteListing<'a> {
    pub fn list(entries: &[(&NoteId, &'a Note)]) -> Vec<Self> {
        entries
            .iter()
            .map(|(id, note)| NoteListing { id: **id, note })
            .collect()
    }
}

/// A page of listings with its position.
#[derive(Debug, Serialize)]
pub struct PageListing<'a> {
    pub page: usize,
    pub pages: usize,
    pub notes: Vec<NoteListing<'a>>,
}
