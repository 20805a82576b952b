//! Server configuration: defaults, then environment, then explicit setters.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use irodori_constant::app::{DEFAULT_BIND, DEFAULT_REFRESH_SECS};
use irodori_core::{MemoryBucket, PaletteBucket, SqliteBucket, db};
use irodori_upstream::{Upstream, UpstreamConfig};

use crate::gateway::PaletteGateway;

/// Where palettes are cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BucketConfig {
    Sqlite(PathBuf),
    /// Process-local; lost on exit.
    Memory,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `host:port` to listen on
    pub bind: String,
    pub bucket: BucketConfig,
    /// Period of the scheduled refresh; zero disables it
    pub refresh_interval: Duration,
    pub upstream: UpstreamConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            bucket: BucketConfig::Sqlite(db::default_db_path()),
            refresh_interval: Duration::from_secs(DEFAULT_REFRESH_SECS),
            upstream: UpstreamConfig::default(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ServerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    pub fn with_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bucket = BucketConfig::Sqlite(path.into());
        self
    }

    pub fn with_ephemeral(mut self) -> Self {
        self.bucket = BucketConfig::Memory;
        self
    }

    pub fn with_refresh_interval(mut self, interval: Duration) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn with_upstream(mut self, upstream: UpstreamConfig) -> Self {
        self.upstream = upstream;
        self
    }

    /// Load configuration from environment variables
    ///
    /// - `IRODORI_BIND`
    /// - `IRODORI_DB_PATH`
    /// - `IRODORI_REFRESH_SECS`
    /// - `IRODORI_CN_URL`, `IRODORI_JP_URL`
    /// - `IRODORI_DERIVE_CMYK`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(bind) = var("IRODORI_BIND") {
            config.bind = bind;
        }
        if let Some(path) = var("IRODORI_DB_PATH") {
            config.bucket = BucketConfig::Sqlite(PathBuf::from(path));
        }
        if let Some(secs) = var("IRODORI_REFRESH_SECS") {
            match secs.trim().parse::<u64>() {
                Ok(secs) => config.refresh_interval = Duration::from_secs(secs),
                Err(_) => tracing::warn!(value = %secs, "ignoring invalid IRODORI_REFRESH_SECS"),
            }
        }
        if let Some(url) = var("IRODORI_CN_URL") {
            config.upstream.cn_url = url;
        }
        if let Some(url) = var("IRODORI_JP_URL") {
            config.upstream.jp_base_url = url;
        }
        if let Some(flag) = var("IRODORI_DERIVE_CMYK").and_then(|v| parse_flag(&v)) {
            config.upstream.derive_cmyk = flag;
        }
        config
    }

    pub fn refresh_enabled(&self) -> bool {
        !self.refresh_interval.is_zero()
    }

    /// Opens the configured bucket. SQLite paths get their parent directory
    /// created and are migrated up front.
    pub fn open_bucket(&self) -> anyhow::Result<Arc<dyn PaletteBucket>> {
        Ok(match &self.bucket {
            BucketConfig::Sqlite(path) => {
                db::ensure_parent_dir(path)?;
                Arc::new(SqliteBucket::open(path)?)
            }
            BucketConfig::Memory => Arc::new(MemoryBucket::new()),
        })
    }

    /// Bucket plus HTTP upstream, wired into a gateway.
    pub fn build_gateway(&self) -> anyhow::Result<PaletteGateway> {
        let bucket = self.open_bucket()?;
        let upstream = Upstream::new(self.upstream.clone())?;
        Ok(PaletteGateway::new(bucket, Arc::new(upstream)))
    }
}
