//! Material Design 3 themes from a single seed color.
//!
//! [`engine`] asks the color-science library for schemes and tonal palettes;
//! the other modules only reshape that output:
//!
//! | `type`        | artifact                                  |
//! |---------------|-------------------------------------------|
//! | `css`         | [`JsonTheme`]: hex schemes and palettes    |
//! | `tailwindcss` | [`CssTheme`]: camelCase color functions    |
//! | `unocss`      | [`Preset`]: generated preset module        |

pub mod css;
pub mod engine;
pub mod error;
pub mod format;
pub mod json;
pub mod preset;
pub mod seed;

use std::fmt;
use std::str::FromStr;

use irodori_constant::theme::DEFAULT_THEME_NAME;

pub use css::{CssTheme, CssValue, KeyStyle, css_theme};
pub use engine::{ThemeSource, derive};
pub use error::{Result, ThemeError};
pub use json::JsonTheme;
pub use preset::{Preset, render_preset, validate_theme_name};
pub use seed::parse_seed;

/// Requested artifact kind, as named by the `type` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeFormat {
    Css,
    Tailwindcss,
    Unocss,
}

impl ThemeFormat {
    pub const ALL: [ThemeFormat; 3] = [
        ThemeFormat::Css,
        ThemeFormat::Tailwindcss,
        ThemeFormat::Unocss,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeFormat::Css => "css",
            ThemeFormat::Tailwindcss => "tailwindcss",
            ThemeFormat::Unocss => "unocss",
        }
    }
}

impl FromStr for ThemeFormat {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        ThemeFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownFormat(s.to_string()))
    }
}

impl fmt::Display for ThemeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeArtifact {
    Json(JsonTheme),
    Css(CssTheme),
    Preset(Preset),
}

/// Parses `seed_hex` and renders the requested artifact.
///
/// `theme_name` only matters for [`ThemeFormat::Unocss`]; it defaults to `m3`.
pub fn derive_theme(
    seed_hex: &str,
    format: ThemeFormat,
    theme_name: Option<&str>,
) -> Result<ThemeArtifact> {
    let seed = parse_seed(seed_hex)?;
    let theme = derive(seed);
    Ok(match format {
        ThemeFormat::Css => ThemeArtifact::Json(JsonTheme::from(&theme)),
        ThemeFormat::Tailwindcss => ThemeArtifact::Css(css_theme(&theme, KeyStyle::Camel)),
        ThemeFormat::Unocss => ThemeArtifact::Preset(render_preset(
            &theme,
            theme_name.unwrap_or(DEFAULT_THEME_NAME),
        )?),
    })
}
