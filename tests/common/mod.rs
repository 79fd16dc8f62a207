//! Shared utilities for integration tests.

pub mod harness;

use std::path::{Path, PathBuf};

/// Returns a config path that never exists, so tests never pick up the
/// developer's own `~/.config/marginalia/config.toml`.
#[allow(dead_code)]
pub fn missing_config(dir: &Path) -> PathBuf {
    dir.join("no-such-config.toml")
}
