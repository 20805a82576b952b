//! SQLite palette bucket under `.irodori/`.
//!
//! - `irodori.db` + WAL: one row per bucket key (`cn`, `jp`) holding the raw
//!   palette JSON text and the time it was written.

mod connection;
mod layout;
mod migrations;
mod palette;

pub use connection::{open_db, open_db_at};
pub use layout::{default_db_path, ensure_data_dir, ensure_parent_dir};
pub use migrations::run_all as run_migrations;
pub use palette::{get_palette, list_keys, put_palette, PaletteRow};
