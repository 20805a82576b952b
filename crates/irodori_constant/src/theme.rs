//! Theme artifact constants.
//!
//! Surface tones are read off the neutral palette; they are aliases layered on
//! top of the engine's native roles.

/// Placeholder the CSS tooling substitutes with the requested opacity.
pub const ALPHA_PLACEHOLDER: &str = "<alpha-value>";

/// Suffix of dark-scheme role keys in camelCase output (`primaryDark`).
pub const DARK_SUFFIX_CAMEL: &str = "Dark";
/// Suffix of dark-scheme role keys in kebab-case output (`primary-dark`).
pub const DARK_SUFFIX_KEBAB: &str = "-dark";

/// (role, light tone, dark tone) on the neutral palette.
pub const SURFACE_TONES: [(&str, u8, u8); 7] = [
    ("surfaceDim", 87, 6),
    ("surfaceBright", 98, 24),
    ("surfaceContainerLowest", 100, 4),
    ("surfaceContainerLow", 96, 10),
    ("surfaceContainer", 94, 12),
    ("surfaceContainerHigh", 92, 17),
    ("surfaceContainerHighest", 90, 24),
];

/// Highest tone of a tonal palette; tones run 0..=MAX_TONE.
pub const MAX_TONE: u8 = 100;

/// Utility categories the UnoCSS shortcut accepts in front of a color.
pub const COLOR_SELECTORS: [&str; 7] = [
    "text",
    "bg",
    "border",
    "outline",
    "decoration",
    "fill",
    "stroke",
];

/// Short scheme codes accepted by the UnoCSS shortcut and the palette they name.
pub const SCHEME_ALIASES: [(&str, &str); 6] = [
    ("P", "primary"),
    ("S", "secondary"),
    ("T", "tertiary"),
    ("E", "error"),
    ("N", "neutral"),
    ("NV", "neutralVariant"),
];

/// Theme name used when a preset request does not provide one.
pub const DEFAULT_THEME_NAME: &str = "m3";
