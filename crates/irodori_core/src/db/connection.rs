//! Open the bucket DB with WAL and migrations.

use anyhow::{Context, Result};
use std::path::Path;

use super::layout;
use super::migrations;

/// Opens the DB file at `db_path`, creating its directory if needed.
/// Enables WAL and runs migrations.
pub fn open_db_at(db_path: &Path) -> Result<rusqlite::Connection> {
    layout::ensure_parent_dir(db_path)?;
    let conn = rusqlite::Connection::open(db_path).context("open irodori.db")?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA busy_timeout=5000;")?;
    migrations::run_all(&conn)?;
    Ok(conn)
}

/// Opens `<root>/.irodori/irodori.db`.
pub fn open_db(root: &Path) -> Result<rusqlite::Connection> {
    let db_path = layout::ensure_data_dir(root)?;
    open_db_at(&db_path)
}
