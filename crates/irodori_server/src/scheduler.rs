//! Periodic palette refresh.
//!
//! Each run re-fetches every locale and overwrites its bucket entry, whether
//! or not anything changed. Locales are refreshed in order and the first
//! failure ends the run; the next tick starts over.

use std::sync::Arc;
use std::time::Duration;

use irodori_core::{Locale, PaletteSnapshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::error::ApiResult;
use crate::gateway::PaletteGateway;

/// One refresh run over [`Locale::ALL`].
pub async fn refresh_all(gateway: &PaletteGateway) -> ApiResult<Vec<(Locale, PaletteSnapshot)>> {
    let mut refreshed = Vec::with_capacity(Locale::ALL.len());
    for locale in Locale::ALL {
        let snapshot = gateway.refresh(locale).await?;
        tracing::info!(locale = %locale, colors = snapshot.len(), "palette refreshed");
        refreshed.push((locale, snapshot));
    }
    Ok(refreshed)
}

/// Spawns the refresh loop. The first run happens one full `every` after the
/// call; a run that overruns delays the following ones.
pub fn spawn_refresh_loop(gateway: Arc<PaletteGateway>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval_at(Instant::now() + every, every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(every_secs = every.as_secs(), "scheduled refresh armed");
        loop {
            ticker.tick().await;
            if let Err(e) = refresh_all(&gateway).await {
                tracing::error!(error = %e, "scheduled refresh failed");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use irodori_core::MemoryBucket;
    use irodori_upstream::{PaletteSource, UpstreamError};

    /// Fails the first `failures` fetches, then serves an empty palette.
    #[derive(Default)]
    struct CountingSource {
        fetches: AtomicUsize,
        failures: usize,
    }

    #[async_trait]
    impl PaletteSource for CountingSource {
        async fn fetch(&self, locale: Locale) -> Result<String, UpstreamError> {
            let n = self.fetches.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                return Err(UpstreamError::Status {
                    url: format!("http://upstream/{locale}"),
                    status: 503,
                });
            }
            Ok("[]".to_string())
        }
    }

    fn gateway(source: Arc<CountingSource>) -> (Arc<PaletteGateway>, Arc<MemoryBucket>) {
        let bucket = Arc::new(MemoryBucket::new());
        (Arc::new(PaletteGateway::new(bucket.clone(), source)), bucket)
    }

    const EVERY: Duration = Duration::from_secs(60);

    #[tokio::test(start_paused = true)]
    async fn test_first_run_waits_one_interval() {
        let source = Arc::new(CountingSource::default());
        let (gateway, bucket) = gateway(source.clone());
        let handle = spawn_refresh_loop(gateway, EVERY);

        tokio::time::sleep(EVERY - Duration::from_secs(1)).await;
        assert_eq!(source.fetches.load(Ordering::SeqCst), 0);
        assert!(bucket.is_empty().await);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
        assert_eq!(bucket.len().await, 2);

        tokio::time::sleep(EVERY).await;
        assert_eq!(source.fetches.load(Ordering::SeqCst), 4);
        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_run_keeps_loop_alive() {
        let source = Arc::new(CountingSource {
            failures: 1,
            ..Default::default()
        });
        let (gateway, bucket) = gateway(source.clone());
        let handle = spawn_refresh_loop(gateway, EVERY);

        // First run aborts after the failing cn fetch.
        tokio::time::sleep(EVERY + Duration::from_secs(1)).await;
        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
        assert!(bucket.is_empty().await);
        assert!(!handle.is_finished());

        tokio::time::sleep(EVERY).await;
        assert_eq!(source.fetches.load(Ordering::SeqCst), 3);
        assert_eq!(bucket.len().await, 2);
        handle.abort();
    }
}
