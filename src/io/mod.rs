//! Filesystem helpers shared by the command handlers.
//!
//! Handles are scoped to the single read or write that needs them; nothing
//! is held across operations.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Create a directory and its parents if missing.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory: {}", path.display()))
}

/// Write rendered content to a file, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
