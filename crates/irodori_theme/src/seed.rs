//! Seed color parsing.

use irodori_core::color::argb_from_rgb;
use irodori_core::hex_to_rgb;

use crate::error::{Result, ThemeError};

/// Parses `#RGB` or `#RRGGBB` (leading `#` optional, any case) into an opaque
/// ARGB integer.
pub fn parse_seed(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let expanded = match digits.len() {
        3 if digits.is_ascii() => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return Err(ThemeError::MalformedSeed(input.to_string())),
    };
    let rgb = hex_to_rgb(&expanded).map_err(|_| ThemeError::MalformedSeed(input.to_string()))?;
    Ok(argb_from_rgb(rgb))
}
