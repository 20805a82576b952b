//! sRGB unit conversion: hex ⇄ RGB, RGB → CMYK, and the packed ARGB integers
//! the Material color engine works with.

use crate::error::ColorError;

/// `[R, G, B]`, serialized as a JSON array the way the palette sources do.
pub type Rgb = [u8; 3];
/// `[C, M, Y, K]`, each 0..=100.
pub type Cmyk = [u8; 4];

/// Parses `#RRGGBB` (the leading `#` is optional) into its three channels.
///
/// Anything that is not exactly six hex digits is rejected instead of
/// producing garbage channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| ColorError::InvalidHex(hex.to_string()))
    };
    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Formats channels as lowercase `#rrggbb`.
pub fn rgb_to_hex([r, g, b]: Rgb) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Naive RGB → CMYK, each component scaled to 0..=100 and rounded.
///
/// Pure black has no chromatic component: it maps to `(0, 0, 0, 100)`.
pub fn rgb_to_cmyk([r, g, b]: Rgb) -> Cmyk {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let k = (1.0 - r).min(1.0 - g).min(1.0 - b);
    if k >= 1.0 {
        return [0, 0, 0, 100];
    }
    let c = (1.0 - r - k) / (1.0 - k);
    let m = (1.0 - g - k) / (1.0 - k);
    let y = (1.0 - b - k) / (1.0 - k);

    let scale = |v: f64| (v * 100.0).round().clamp(0.0, 100.0) as u8;
    [scale(c), scale(m), scale(y), scale(k)]
}

/// Opaque ARGB integer for the given channels.
pub fn argb_from_rgb([r, g, b]: Rgb) -> u32 {
    0xFF00_0000 | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Channels of an ARGB integer; alpha is dropped.
pub fn rgb_from_argb(argb: u32) -> Rgb {
    [
        ((argb >> 16) & 0xFF) as u8,
        ((argb >> 8) & 0xFF) as u8,
        (argb & 0xFF) as u8,
    ]
}

/// Lowercase `#rrggbb` for an ARGB integer.
pub fn hex_from_argb(argb: u32) -> String {
    rgb_to_hex(rgb_from_argb(argb))
}
