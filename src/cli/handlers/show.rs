//! Show command handler.

use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::cli::ShowArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::domain::{NoteId, time_ago};
use crate::infra::NoteStore;

pub fn handle_show(args: &ShowArgs, data_file: &Path) -> Result<()> {
    let id: NoteId = args
        .id
        .parse()
        .with_context(|| format!("invalid note id: {}", args.id))?;
    let notes = NoteStore::new(data_file).load();
    let Some(note) = notes.get(&id) else {
        bail!("note not found: {}", id);
    };

    match args.format {
        OutputFormat::Human => {
            println!("# {}", note.display_title());
            println!();
            if !note.url.is_empty() {
                println!("{}", note.url);
                println!();
            }
            if !note.quote.is_empty() {
                for line in note.quote.lines() {
                    println!("> {}", line);
                }
                println!();
            }
            if !note.note.is_empty() {
                println!("{}", note.note);
                println!();
            }

            let neighbors = notes.neighbors(&id);
            println!(
                "ID: {}  Created: {} ({} ago)",
                id,
                id.timestamp().format("%Y-%m-%d %H:%M"),
                time_ago(id.timestamp(), chrono::Utc::now())
            );
            if let Some(prev) = neighbors.previous {
                println!("Previous: {}", prev);
            }
            if let Some(next) = neighbors.next {
                println!("Next: {}", next);
            }
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing { id, note });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
