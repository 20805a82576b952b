//! Application metadata constants

pub const NAME: &str = "irodori";
pub const DISPLAY_NAME: &str = "irodori colors";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Traditional color palettes and Material Design 3 themes over HTTP";

/// Directory name for irodori data (palette bucket DB)
pub const DATA_DIR: &str = ".irodori";
/// Basename of the palette bucket DB inside DATA_DIR
pub const DB_FILE: &str = "irodori.db";

/// Default listen address for `irodori serve`
pub const DEFAULT_BIND: &str = "127.0.0.1:8787";
/// Default period of the scheduled palette refresh, in seconds (one day)
pub const DEFAULT_REFRESH_SECS: u64 = 24 * 60 * 60;
