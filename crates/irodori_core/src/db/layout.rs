//! `.irodori/` directory layout.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use irodori_constant::app::{DATA_DIR, DB_FILE};

/// Ensures `<root>/.irodori` exists and returns the path of the bucket DB inside it.
pub fn ensure_data_dir(root: &Path) -> Result<PathBuf> {
    let data_dir = root.join(DATA_DIR);
    std::fs::create_dir_all(&data_dir).context("create data dir")?;
    Ok(data_dir.join(DB_FILE))
}

/// Ensures the directory holding `db_path` exists.
pub fn ensure_parent_dir(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).context("create bucket db dir")?;
        }
    }
    Ok(())
}

/// Bucket DB in the current directory's `.irodori/` (not created).
pub fn default_db_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(DATA_DIR)
        .join(DB_FILE)
}
