pub mod bucket;
pub mod color;
pub mod db;
pub mod error;
pub mod locale;
pub mod record;

pub use bucket::{MemoryBucket, PaletteBucket, SqliteBucket, StoredPalette};
pub use color::{hex_from_argb, hex_to_rgb, rgb_from_argb, rgb_to_cmyk, rgb_to_hex, Cmyk, Rgb};
pub use error::{ColorError, CoreError, Result};
pub use locale::Locale;
pub use record::{ColorRecord, PaletteSnapshot};
