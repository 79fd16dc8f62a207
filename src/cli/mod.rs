//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// marginalia - a personal notes and bookmarks site
#[derive(Parser, Debug)]
#[command(name = "marginalia", version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/marginalia/config.toml)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Notes data file (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub data: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the web server
    Serve(ServeArgs),

    /// List notes, newest first
    #[command(name = "ls")]
    List(ListArgs),

    /// Search notes by substring
    Search(SearchArgs),

    /// Show a single note
    Show(ShowArgs),

    /// Create a note, or overwrite one when --id is given
    Add(AddArgs),

    /// Delete a note
    Rm(RmArgs),

    /// Print the hash of a password for the config file
    HashPassword(HashPasswordArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `serve` command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to listen on (overrides config file)
    #[arg(short, long)]
    pub bind: Option<String>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Page number, starting at 1
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query (case-insensitive substring)
    pub query: String,

    /// Maximum number of results (default: config search_limit)
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note ID
    pub id: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Reuse this ID instead of the current time (overwrites any note there)
    #[arg(long)]
    pub id: Option<String>,

    #[arg(short, long, default_value = "")]
    pub url: String,

    #[arg(short, long, default_value = "")]
    pub title: String,

    #[arg(short, long, default_value = "")]
    pub quote: String,

    /// Free-text annotation (markdown)
    #[arg(short, long, default_value = "")]
    pub note: String,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note ID
    pub id: String,
}

/// Arguments for the `hash-password` command
#[derive(Parser, Debug)]
pub struct HashPasswordArgs {
    /// The password to hash
    pub password: String,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_data_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["marginalia", "ls", "--data", "/tmp/n.json"]).unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("/tmp/n.json")));
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn ls_accepts_non_positive_pages() {
        let cli = Cli::try_parse_from(["marginalia", "ls", "--page", "-3"]).unwrap();
        match cli.command {
            Command::List(args) => assert_eq!(args.page, -3),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
