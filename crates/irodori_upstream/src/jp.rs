//! `jp` palette: scraped from the listing page and its stylesheet.

use crate::error::Result;
use crate::extract::{scrape_palette, ListItemMatcher};
use crate::Upstream;

/// Fetches the listing and stylesheet, scrapes them, and serializes the
/// records to JSON text for uniform storage with `cn`.
pub async fn fetch_japan_colors(upstream: &Upstream) -> Result<String> {
    let config = upstream.config();
    let html = upstream.get_text(&config.jp_base_url).await?;
    let css = upstream.get_text(&config.jp_css_url()).await?;

    let records = scrape_palette(&html, &css, &ListItemMatcher, config.derive_cmyk)?;
    Ok(serde_json::to_string(&records)?)
}
