//! SQL schema for the bucket DB. Applied on open.

/// Palette bucket: one row per key, replaced wholesale on every write.
pub const PALETTE_BUCKET: &str = "
CREATE TABLE IF NOT EXISTS palette_bucket (
    key TEXT PRIMARY KEY NOT NULL,
    body TEXT NOT NULL,
    uploaded_at INTEGER NOT NULL
);
";

/// Run all migrations on an open connection.
pub fn run_all(conn: &rusqlite::Connection) -> anyhow::Result<()> {
    conn.execute_batch(PALETTE_BUCKET)?;
    Ok(())
}
