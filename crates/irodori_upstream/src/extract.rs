//! Two-stage scrape of the `jp` listing.
//!
//! Stage one walks the HTML and yields `(id, name, pinyin)` in document order.
//! Stage two joins each id against the stylesheet to find its hover
//! background color. Both stages sit behind traits so the regex matching can
//! be swapped for a structured parser without touching the join.

use std::collections::HashMap;
use std::sync::OnceLock;

use irodori_core::ColorRecord;
use regex::Regex;

use crate::error::{Result, UpstreamError};

/// One listing entry before its color is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedEntry {
    pub id: String,
    pub name: String,
    pub pinyin: String,
}

/// Stage one: structural match over the listing document.
pub trait EntryMatcher {
    fn entries(&self, html: &str) -> Vec<ScrapedEntry>;
}

/// Stage two: color lookup by entry id.
pub trait StyleLookup {
    fn hex_for(&self, id: &str) -> Option<&str>;
}

/// Matches `<li id="colN"><div><a ...>NAME, PINYIN` list items.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListItemMatcher;

fn list_item_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"<li id="(?P<id>col\d+)"><div><a[^>]*>(?P<name>[^,]+), (?P<pinyin>[^</a]+)"#)
            .expect("list item pattern is valid")
    })
}

impl EntryMatcher for ListItemMatcher {
    fn entries(&self, html: &str) -> Vec<ScrapedEntry> {
        list_item_regex()
            .captures_iter(html)
            .map(|caps| ScrapedEntry {
                id: caps["id"].to_string(),
                name: caps["name"].to_string(),
                pinyin: caps["pinyin"].to_string(),
            })
            .collect()
    }
}

/// Index of `.ID a:hover{background-color:#HEX` rules. The first rule for an
/// id wins, mirroring a top-down search of the stylesheet.
#[derive(Debug, Default, Clone)]
pub struct HoverStyleIndex {
    colors: HashMap<String, String>,
}

fn hover_rule_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\.(?P<id>[A-Za-z0-9_-]+) a:hover\{background-color:(?P<hex>#[a-zA-Z0-9]+)")
            .expect("hover rule pattern is valid")
    })
}

impl HoverStyleIndex {
    pub fn parse(css: &str) -> Self {
        let mut colors = HashMap::new();
        for caps in hover_rule_regex().captures_iter(css) {
            colors
                .entry(caps["id"].to_string())
                .or_insert_with(|| caps["hex"].to_string());
        }
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl StyleLookup for HoverStyleIndex {
    fn hex_for(&self, id: &str) -> Option<&str> {
        self.colors.get(id).map(String::as_str)
    }
}

/// Joins listing entries with their colors, in listing order.
///
/// Any entry without a color rule aborts the whole scrape; a partial palette
/// is never returned.
pub fn join_entries(
    entries: Vec<ScrapedEntry>,
    styles: &impl StyleLookup,
    derive_cmyk: bool,
) -> Result<Vec<ColorRecord>> {
    entries
        .into_iter()
        .map(|entry| {
            let hex = styles
                .hex_for(&entry.id)
                .ok_or_else(|| UpstreamError::MissingStyle {
                    id: entry.id.clone(),
                })?;
            let record = ColorRecord::from_hex(hex, entry.name, Some(entry.pinyin))
                .map_err(|source| UpstreamError::Color {
                    id: entry.id.clone(),
                    source,
                })?;
            Ok(if derive_cmyk {
                record.with_derived_cmyk()
            } else {
                record
            })
        })
        .collect()
}

/// Full scrape: listing HTML + stylesheet → normalized records.
pub fn scrape_palette(
    html: &str,
    css: &str,
    matcher: &impl EntryMatcher,
    derive_cmyk: bool,
) -> Result<Vec<ColorRecord>> {
    let entries = matcher.entries(html);
    let styles = HoverStyleIndex::parse(css);
    tracing::debug!(
        entries = entries.len(),
        hover_rules = styles.len(),
        "jp listing matched"
    );
    join_entries(entries, &styles, derive_cmyk)
}
