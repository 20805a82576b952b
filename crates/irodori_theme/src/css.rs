//! Flat role → `rgb(R G B / <alpha-value>)` mapping for CSS tooling.
//!
//! Light roles use the bare name, dark roles carry the dark suffix, the seven
//! surface aliases are read off the neutral palette, and each tonal palette
//! becomes a nested tone map. A palette that shares its name with a light role
//! keeps that role's color as `DEFAULT`.

use indexmap::IndexMap;
use irodori_constant::theme::{
    ALPHA_PLACEHOLDER, DARK_SUFFIX_CAMEL, DARK_SUFFIX_KEBAB, SURFACE_TONES,
};
use irodori_core::rgb_from_argb;
use serde::{Deserialize, Serialize};

use crate::engine::ThemeSource;

/// Key casing of the emitted map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyStyle {
    /// `onPrimaryContainer`, `primaryDark`
    #[default]
    Camel,
    /// `on-primary-container`, `primary-dark`
    Kebab,
}

impl KeyStyle {
    pub fn key(self, camel: &str) -> String {
        match self {
            KeyStyle::Camel => camel.to_string(),
            KeyStyle::Kebab => kebab_case(camel),
        }
    }

    pub fn dark_key(self, camel: &str) -> String {
        match self {
            KeyStyle::Camel => format!("{camel}{DARK_SUFFIX_CAMEL}"),
            KeyStyle::Kebab => format!("{}{DARK_SUFFIX_KEBAB}", kebab_case(camel)),
        }
    }
}

/// `neutralVariant` → `neutral-variant`
pub fn kebab_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    for c in camel.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `rgb(R G B / <alpha-value>)`
pub fn color_function(argb: u32) -> String {
    let [r, g, b] = rgb_from_argb(argb);
    format!("rgb({r} {g} {b} / {ALPHA_PLACEHOLDER})")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    Color(String),
    Palette(IndexMap<String, String>),
}

impl CssValue {
    pub fn as_color(&self) -> Option<&str> {
        match self {
            CssValue::Color(color) => Some(color),
            CssValue::Palette(_) => None,
        }
    }
}

pub type CssTheme = IndexMap<String, CssValue>;

pub fn css_theme(theme: &ThemeSource, style: KeyStyle) -> CssTheme {
    let mut out = CssTheme::new();
    let neutral = theme.palette("neutral");

    for (role, argb) in &theme.light.roles {
        out.insert(style.key(role), CssValue::Color(color_function(*argb)));
    }
    if let Some(neutral) = neutral {
        for (role, light, _) in SURFACE_TONES {
            if let Some(argb) = neutral.tone(light) {
                out.insert(style.key(role), CssValue::Color(color_function(argb)));
            }
        }
    }

    for (role, argb) in &theme.dark.roles {
        out.insert(style.dark_key(role), CssValue::Color(color_function(*argb)));
    }
    if let Some(neutral) = neutral {
        for (role, _, dark) in SURFACE_TONES {
            if let Some(argb) = neutral.tone(dark) {
                out.insert(style.dark_key(role), CssValue::Color(color_function(argb)));
            }
        }
    }

    for palette in &theme.palettes {
        let key = style.key(palette.name);
        let mut tones = IndexMap::new();
        if let Some(CssValue::Color(default)) = out.get(&key) {
            tones.insert("DEFAULT".to_string(), default.clone());
        }
        for (tone, argb) in palette.tones.iter().enumerate() {
            tones.insert(tone.to_string(), color_function(*argb));
        }
        // Replacing an existing key keeps its position.
        out.insert(key, CssValue::Palette(tones));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Scheme, TonalPalette};

    fn fixture() -> ThemeSource {
        ThemeSource {
            source: 0xFF12_3456,
            light: Scheme {
                roles: vec![("primary", 0xFF01_0203), ("onPrimaryContainer", 0xFFFF_FFFF)],
            },
            dark: Scheme {
                roles: vec![("primary", 0xFF0A_0B0C), ("onPrimaryContainer", 0xFF00_0000)],
            },
            palettes: vec![
                TonalPalette {
                    name: "primary",
                    tones: vec![0xFF00_0000; 101],
                },
                TonalPalette {
                    name: "neutral",
                    tones: (0..=100u32).map(|t| 0xFF00_0000 | t).collect(),
                },
            ],
        }
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("onPrimaryContainer"), "on-primary-container");
        assert_eq!(kebab_case("neutralVariant"), "neutral-variant");
        assert_eq!(kebab_case("scrim"), "scrim");
    }

    #[test]
    fn test_color_function() {
        assert_eq!(color_function(0xFFF1_939C), "rgb(241 147 156 / <alpha-value>)");
    }

    #[test]
    fn test_camel_keys() {
        let css = css_theme(&fixture(), KeyStyle::Camel);
        assert_eq!(
            css["onPrimaryContainer"].as_color(),
            Some("rgb(255 255 255 / <alpha-value>)")
        );
        assert_eq!(
            css["onPrimaryContainerDark"].as_color(),
            Some("rgb(0 0 0 / <alpha-value>)")
        );
        assert_eq!(css["surfaceDim"].as_color(), Some("rgb(0 0 87 / <alpha-value>)"));
        assert_eq!(
            css["surfaceContainerHighestDark"].as_color(),
            Some("rgb(0 0 24 / <alpha-value>)")
        );
    }

    #[test]
    fn test_palette_keeps_role_as_default() {
        let css = css_theme(&fixture(), KeyStyle::Camel);
        let CssValue::Palette(primary) = &css["primary"] else {
            panic!("primary should be a palette");
        };
        assert_eq!(primary["DEFAULT"], "rgb(1 2 3 / <alpha-value>)");
        assert_eq!(primary.len(), 102);
        assert_eq!(css.get_index_of("primary"), Some(0));

        let CssValue::Palette(neutral) = &css["neutral"] else {
            panic!("neutral should be a palette");
        };
        assert!(!neutral.contains_key("DEFAULT"));
        assert_eq!(neutral.len(), 101);
    }

    #[test]
    fn test_kebab_keys() {
        let css = css_theme(&fixture(), KeyStyle::Kebab);
        assert!(css.contains_key("on-primary-container"));
        assert!(css.contains_key("on-primary-container-dark"));
        assert!(css.contains_key("surface-container-lowest-dark"));
        assert!(!css.contains_key("onPrimaryContainer"));
    }
}
