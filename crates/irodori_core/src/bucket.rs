//! Key-value bucket holding the raw palette JSON per locale.
//!
//! Writes are whole-value replacements under a single key and the backend
//! stamps the write time, so concurrent writers only ever race to "last write
//! wins".

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::db;
use crate::error::{CoreError, Result};

/// A bucket entry: the bytes exactly as stored plus the time they were stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPalette {
    pub body: String,
    pub uploaded: DateTime<Utc>,
}

#[async_trait]
pub trait PaletteBucket: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    async fn get(&self, key: &str) -> Result<Option<StoredPalette>>;

    /// Stores `body` under `key`, replacing any previous value, and returns
    /// the stored-at time the backend assigned.
    async fn put(&self, key: &str, body: String) -> Result<DateTime<Utc>>;
}

/// Process-local bucket. Contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryBucket {
    entries: RwLock<HashMap<String, StoredPalette>>,
}

impl MemoryBucket {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl PaletteBucket for MemoryBucket {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<StoredPalette>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, body: String) -> Result<DateTime<Utc>> {
        let uploaded = Utc::now();
        self.entries
            .write()
            .await
            .insert(key.to_string(), StoredPalette { body, uploaded });
        Ok(uploaded)
    }
}

/// SQLite-backed bucket; every call opens the DB on a blocking thread.
#[derive(Debug, Clone)]
pub struct SqliteBucket {
    db_path: PathBuf,
}

impl SqliteBucket {
    /// Opens (and migrates) the DB once so configuration errors surface at startup.
    pub fn open(db_path: impl Into<PathBuf>) -> Result<Self> {
        let db_path = db_path.into();
        db::open_db_at(&db_path)?;
        Ok(Self { db_path })
    }

    pub fn db_path(&self) -> &PathBuf {
        &self.db_path
    }
}

#[async_trait]
impl PaletteBucket for SqliteBucket {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    async fn get(&self, key: &str) -> Result<Option<StoredPalette>> {
        let db_path = self.db_path.clone();
        let key = key.to_string();
        let row = tokio::task::spawn_blocking(move || {
            let conn = db::open_db_at(&db_path)?;
            db::get_palette(&conn, &key)
        })
        .await
        .context("bucket get spawn_blocking")??;

        row.map(|row| -> Result<StoredPalette> {
            let uploaded = DateTime::from_timestamp_millis(row.uploaded_at_ms).ok_or_else(|| {
                CoreError::Bucket(format!("corrupt timestamp {}", row.uploaded_at_ms))
            })?;
            Ok(StoredPalette {
                body: row.body,
                uploaded,
            })
        })
        .transpose()
    }

    async fn put(&self, key: &str, body: String) -> Result<DateTime<Utc>> {
        let db_path = self.db_path.clone();
        let key = key.to_string();
        let uploaded = Utc::now();
        let uploaded_ms = uploaded.timestamp_millis();
        tokio::task::spawn_blocking(move || {
            let conn = db::open_db_at(&db_path)?;
            db::put_palette(&conn, &key, &body, uploaded_ms)
        })
        .await
        .context("bucket put spawn_blocking")??;

        tracing::debug!(backend = "sqlite", "palette stored");
        // Millisecond precision is what gets persisted; report the same value.
        Ok(DateTime::from_timestamp_millis(uploaded_ms).unwrap_or(uploaded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_bucket_get_put() {
        let bucket = MemoryBucket::new();
        assert!(bucket.get("cn").await.unwrap().is_none());

        let stored_at = bucket.put("cn", "[]".to_string()).await.unwrap();
        let entry = bucket.get("cn").await.unwrap().unwrap();
        assert_eq!(entry.body, "[]");
        assert_eq!(entry.uploaded, stored_at);
        assert_eq!(bucket.len().await, 1);
    }

    #[tokio::test]
    async fn memory_bucket_last_write_wins() {
        let bucket = MemoryBucket::new();
        bucket.put("jp", "[1]".to_string()).await.unwrap();
        bucket.put("jp", "[2]".to_string()).await.unwrap();
        assert_eq!(bucket.get("jp").await.unwrap().unwrap().body, "[2]");
        assert_eq!(bucket.len().await, 1);
    }

    #[tokio::test]
    async fn sqlite_bucket_persists_across_handles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("irodori.db");

        let bucket = SqliteBucket::open(&path).unwrap();
        assert!(bucket.get("cn").await.unwrap().is_none());
        let stored_at = bucket.put("cn", r##"[{"hex":"#fff"}]"##.to_string()).await.unwrap();

        let reopened = SqliteBucket::open(&path).unwrap();
        let entry = reopened.get("cn").await.unwrap().unwrap();
        assert_eq!(entry.body, r##"[{"hex":"#fff"}]"##);
        assert_eq!(entry.uploaded, stored_at);
    }
}
