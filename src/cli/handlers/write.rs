//! Add and remove command handlers.

use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::cli::{AddArgs, RmArgs};
use crate::domain::{Note, NoteId};
use crate::infra::NoteStore;

pub fn handle_add(args: &AddArgs, data_file: &Path) -> Result<()> {
    let id = match args.id.as_deref() {
        Some(raw) => {
            NoteId::parse_optional(raw).with_context(|| format!("invalid note id: {raw}"))?
        }
        None => None,
    };

    let store = NoteStore::new(data_file);
    let mut notes = store.load();
    let note = Note::new(&args.url, &args.title, &args.quote, &args.note);
    let id = store
        .upsert(&mut notes, id, note)
        .with_context(|| format!("failed to save notes to {}", data_file.display()))?;

    tracing::info!(id = %id, "note saved");
    println!("{}", id);
    Ok(())
}

pub fn handle_rm(args: &RmArgs, data_file: &Path) -> Result<()> {
    let id: NoteId = args
        .id
        .parse()
        .with_context(|| format!("invalid note id: {}", args.id))?;

    let store = NoteStore::new(data_file);
    let mut notes = store.load();
    let removed = store
        .delete(&mut notes, &id)
        .with_context(|| format!("failed to save notes to {}", data_file.display()))?;

    if !removed {
        bail!("note not found: {}", id);
    }
    println!("Deleted {}", id);
    Ok(())
}
