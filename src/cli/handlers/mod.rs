//! Command handlers for the CLI.

mod list;
mod serve;
mod show;
mod write;

use std::io;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::generate;

use super::{Cli, CompletionsArgs, HashPasswordArgs};
use crate::domain::{Note, NoteId};
use crate::infra::hash_password;

pub use list::{handle_list, handle_search};
pub use serve::handle_serve;
pub use show::handle_show;
pub use write::{handle_add, handle_rm};

pub fn handle_hash_password(args: &HashPasswordArgs) -> Result<()> {
    println!("{}", hash_password(&args.password));
    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(args.shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}

// ===========================================
// Shared Utilities
// ===========================================

/// Prints a one-line summary of a note, with its URL underneath.
pub(crate) fn print_note_line(id: &NoteId, note: &Note) {
    println!(
        "{}  {}  {}",
        id,
        id.timestamp().format("%Y-%m-%d"),
        truncate_str(note.display_title(), 60)
    );
    if !note.url.is_empty() && note.url != note.display_title() {
        println!("    {}", note.url);
    }
}

/// Truncates a string to a maximum display width, adding ellipsis if needed.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_width.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
