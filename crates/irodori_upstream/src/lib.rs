//! Upstream palette fetchers.
//!
//! Each locale has its own strategy; both hand back the palette as JSON text so
//! the bucket stores exactly what was fetched:
//!
//! - `cn`: one GET of a pre-built JSON array, passed through untouched.
//! - `jp`: GET the listing HTML and its stylesheet, scrape, serialize.
//!
//! No retries: a failed request fails the call.

pub mod cn;
pub mod error;
pub mod extract;
pub mod jp;

use async_trait::async_trait;
use irodori_constant::upstream;
use irodori_core::Locale;
use irodori_observability::{record_duration, record_error, upstream_span};
use tracing::Instrument;

pub use error::{Result, UpstreamError};
pub use extract::{
    join_entries, scrape_palette, EntryMatcher, HoverStyleIndex, ListItemMatcher, ScrapedEntry,
    StyleLookup,
};

/// Anything that can produce the raw palette JSON for a locale.
#[async_trait]
pub trait PaletteSource: Send + Sync {
    async fn fetch(&self, locale: Locale) -> Result<String>;
}

/// Where the upstream palettes live and how to normalize them.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    /// JSON palette for `cn`.
    pub cn_url: String,
    /// Listing page for `jp`; the stylesheet path is appended to it.
    pub jp_base_url: String,
    /// Attach derived CMYK to scraped `jp` records.
    pub derive_cmyk: bool,
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            cn_url: upstream::CN_COLORS_URL.to_string(),
            jp_base_url: upstream::JP_BASE_URL.to_string(),
            derive_cmyk: false,
            user_agent: upstream::USER_AGENT.to_string(),
        }
    }
}

impl UpstreamConfig {
    pub fn with_cn_url(mut self, url: impl Into<String>) -> Self {
        self.cn_url = url.into();
        self
    }

    pub fn with_jp_base_url(mut self, url: impl Into<String>) -> Self {
        self.jp_base_url = url.into();
        self
    }

    pub fn with_derive_cmyk(mut self, on: bool) -> Self {
        self.derive_cmyk = on;
        self
    }

    /// Stylesheet URL next to the `jp` listing.
    pub fn jp_css_url(&self) -> String {
        format!(
            "{}/{}",
            self.jp_base_url.trim_end_matches('/'),
            upstream::JP_CSS_PATH
        )
    }
}

/// HTTP-backed [`PaletteSource`].
#[derive(Debug, Clone)]
pub struct Upstream {
    client: reqwest::Client,
    config: UpstreamConfig,
}

impl Upstream {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| UpstreamError::Client(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// GET `url` and return the body text; non-2xx is an error.
    pub(crate) async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| UpstreamError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|source| UpstreamError::Request {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl PaletteSource for Upstream {
    async fn fetch(&self, locale: Locale) -> Result<String> {
        let url = match locale {
            Locale::Cn => self.config.cn_url.as_str(),
            Locale::Jp => self.config.jp_base_url.as_str(),
        };
        async move {
            let started = std::time::Instant::now();
            let body = match locale {
                Locale::Cn => cn::fetch_china_colors(self).await,
                Locale::Jp => jp::fetch_japan_colors(self).await,
            };
            record_duration("fetch.duration_ms", started.elapsed());
            match &body {
                Ok(text) => tracing::info!(bytes = text.len(), "upstream palette fetched"),
                Err(e) => record_error(e),
            }
            body
        }
        .instrument(upstream_span!(locale, url))
        .await
    }
}
