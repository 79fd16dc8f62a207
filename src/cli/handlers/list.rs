//! List and search command handlers.

use anyhow::Result;
use std::path::Path;

use super::print_note_line;
use crate::cli::config::Config;
use crate::cli::output::{NoteListing, Output, OutputFormat, PageListing};
use crate::cli::{ListArgs, SearchArgs};
use crate::domain::paginate;
use crate::infra::NoteStore;

pub fn handle_list(args: &ListArgs, data_file: &Path, config: &Config) -> Result<()> {
    let notes = NoteStore::new(data_file).load();
    let entries: Vec<_> = notes.iter().collect();
    let page = paginate(&entries, args.page, config.page_size);

    match args.format {
        OutputFormat::Human => {
            if page.items.is_empty() {
                println!("No notes found.");
            } else {
                for (id, note) in page.items {
                    print_note_line(id, note);
                }
            }
            if page.total_pages > 1 {
                println!();
                println!("Page {} of {}", page.number, page.total_pages);
                if page.has_next() {
                    println!("More: ls --page {}", page.number + 1);
                }
            }
        }
        OutputFormat::Json => {
            let output = Output::new(PageListing {
                page: page.number,
                pages: page.total_pages,
                notes: NoteListing::list(page.items),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn handle_search(args: &SearchArgs, data_file: &Path, config: &Config) -> Result<()> {
    let notes = NoteStore::new(data_file).load();
    let results = notes.search(&args.query);
    let limit = args.limit.unwrap_or(config.search_limit);
    let shown = &results[..results.len().min(limit)];

    match args.format {
        OutputFormat::Human => {
            if shown.is_empty() {
                println!("No matching notes found.");
            } else {
                for (id, note) in shown {
                    print_note_line(id, note);
                }
                println!();
                if shown.len() < results.len() {
                    println!("{} of {} result(s)", shown.len(), results.len());
                } else {
                    println!("{} result(s)", results.len());
                }
            }
        }
        OutputFormat::Json => {
            let output = Output::new(NoteListing::list(shown));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
