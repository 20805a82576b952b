//! Cache-aside palette reads.
//!
//! A hit returns the stored bytes with their stored-at time. A miss fetches
//! upstream, writes the raw text to the bucket and returns it stamped with
//! the current time. Nothing expires; entries only change when overwritten.
//! Concurrent misses for one locale may both fetch; the last write wins.

use std::sync::Arc;

use chrono::Utc;
use irodori_core::{Locale, PaletteBucket, PaletteSnapshot};
use irodori_observability::bucket_span;
use irodori_upstream::PaletteSource;
use tracing::Instrument;

use crate::error::ApiResult;

#[derive(Clone)]
pub struct PaletteGateway {
    bucket: Arc<dyn PaletteBucket>,
    source: Arc<dyn PaletteSource>,
}

impl std::fmt::Debug for PaletteGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaletteGateway")
            .field("bucket", &self.bucket.backend())
            .finish_non_exhaustive()
    }
}

impl PaletteGateway {
    pub fn new(bucket: Arc<dyn PaletteBucket>, source: Arc<dyn PaletteSource>) -> Self {
        Self { bucket, source }
    }

    pub fn bucket(&self) -> &Arc<dyn PaletteBucket> {
        &self.bucket
    }

    /// Cached palette for `locale`, fetched and stored on a miss.
    pub async fn get(&self, locale: Locale) -> ApiResult<PaletteSnapshot> {
        let key = locale.bucket_key();
        let span = bucket_span!(self.bucket.backend(), "get", key);
        let cached = self.bucket.get(key).instrument(span.clone()).await?;
        span.record("bucket.hit", cached.is_some());

        if let Some(entry) = cached {
            tracing::debug!(locale = %locale, uploaded = %entry.uploaded, "palette cache hit");
            return Ok(PaletteSnapshot {
                colors: serde_json::from_str(&entry.body)?,
                last_update_at: entry.uploaded,
            });
        }

        tracing::info!(locale = %locale, "palette cache miss");
        let body = self.source.fetch(locale).await?;
        let colors = serde_json::from_str(&body)?;
        self.store(locale, body).await?;
        Ok(PaletteSnapshot {
            colors,
            last_update_at: Utc::now(),
        })
    }

    /// Fetches `locale` unconditionally and overwrites its bucket entry.
    pub async fn refresh(&self, locale: Locale) -> ApiResult<PaletteSnapshot> {
        let body = self.source.fetch(locale).await?;
        let colors = serde_json::from_str(&body)?;
        let stored_at = self.store(locale, body).await?;
        Ok(PaletteSnapshot {
            colors,
            last_update_at: stored_at,
        })
    }

    async fn store(&self, locale: Locale, body: String) -> ApiResult<chrono::DateTime<Utc>> {
        let key = locale.bucket_key();
        let bytes = body.len();
        let stored_at = self
            .bucket
            .put(key, body)
            .instrument(bucket_span!(self.bucket.backend(), "put", key))
            .await?;
        tracing::info!(locale = %locale, bytes, stored_at = %stored_at, "palette stored");
        Ok(stored_at)
    }
}
