//! Serve command handler.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::cli::ServeArgs;
use crate::cli::config::Config;
use crate::infra::{CachedStore, NoteStore};
use crate::web::{self, AppState};

pub async fn handle_serve(args: &ServeArgs, data_file: &Path, config: &Config) -> Result<()> {
    let store = CachedStore::open(NoteStore::new(data_file));
    let state = AppState::new(store, config.site_settings()?, config.password_hash.clone())?;
    let bind = args.bind.as_deref().unwrap_or(&config.bind);

    web::serve(Arc::new(state), bind).await
}
