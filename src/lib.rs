//! marginalia - a personal notes and bookmarks site backed by a JSON file

pub mod cli;
pub mod domain;
pub mod infra;
pub mod web;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_completions, handle_hash_password, handle_list, handle_rm,
        handle_search, handle_serve, handle_show,
    },
};

/// Main entry point for the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    init_tracing(cli.verbose, &config.log_level);

    let data_file = config.data_file(cli.data.as_ref());

    match &cli.command {
        Command::Serve(args) => handle_serve(args, &data_file, &config).await,
        Command::List(args) => handle_list(args, &data_file, &config),
        Command::Search(args) => handle_search(args, &data_file, &config),
        Command::Show(args) => handle_show(args, &data_file),
        Command::Add(args) => handle_add(args, &data_file),
        Command::Rm(args) => handle_rm(args, &data_file),
        Command::HashPassword(args) => handle_hash_password(args),
        Command::Completions(args) => handle_completions(args),
    }
}

/// `RUST_LOG` wins, then `-v`/`-vv`, then the configured level.
fn init_tracing(verbose: u8, log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = match verbose {
            0 => log_level,
            1 => "debug",
            _ => "trace",
        };
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    });

    // Logs go to stderr so stdout stays parseable for --format json.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
