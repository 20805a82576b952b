//! Third-party palette sources.

/// Pre-built JSON palette for the `cn` locale.
pub const CN_COLORS_URL: &str = "http://zhongguose.com/colors.json";

/// Listing page for the `jp` locale; the stylesheet lives under it.
pub const JP_BASE_URL: &str = "https://nipponcolors.com/";
/// Stylesheet carrying the hover background color of every `jp` entry.
pub const JP_CSS_PATH: &str = "min/g=nipponcolors_css";

pub const USER_AGENT: &str = concat!("irodori/", env!("CARGO_PKG_VERSION"));
