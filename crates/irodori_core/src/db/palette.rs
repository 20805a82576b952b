//! Palette rows.

use anyhow::Result;

/// Stored palette body and its write time in Unix milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRow {
    pub body: String,
    pub uploaded_at_ms: i64,
}

/// Reads the palette stored under `key`, if any.
pub fn get_palette(conn: &rusqlite::Connection, key: &str) -> Result<Option<PaletteRow>> {
    let mut stmt = conn.prepare("SELECT body, uploaded_at FROM palette_bucket WHERE key = ?1")?;
    let mut rows = stmt.query(rusqlite::params![key])?;
    let row = rows.next()?.map(|row| -> rusqlite::Result<PaletteRow> {
        Ok(PaletteRow {
            body: row.get(0)?,
            uploaded_at_ms: row.get(1)?,
        })
    });
    Ok(row.transpose()?)
}

/// Replaces the palette stored under `key`.
pub fn put_palette(
    conn: &rusqlite::Connection,
    key: &str,
    body: &str,
    uploaded_at_ms: i64,
) -> Result<()> {
    conn.execute(
        "INSERT INTO palette_bucket (key, body, uploaded_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET body = ?2, uploaded_at = ?3",
        rusqlite::params![key, body, uploaded_at_ms],
    )?;
    Ok(())
}

/// Keys currently present, sorted.
pub fn list_keys(conn: &rusqlite::Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare("SELECT key FROM palette_bucket ORDER BY key")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
}
