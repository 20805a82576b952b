//! Hex-valued theme: `{ source, schemes: { light, dark }, palettes }`.

use indexmap::IndexMap;
use irodori_core::hex_from_argb;
use serde::{Deserialize, Serialize};

use crate::engine::ThemeSource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonTheme {
    pub source: String,
    /// scheme name → role → `#rrggbb`
    pub schemes: IndexMap<String, IndexMap<String, String>>,
    /// palette name → tone (`"0"`..`"100"`) → `#rrggbb`
    pub palettes: IndexMap<String, IndexMap<String, String>>,
}

impl From<&ThemeSource> for JsonTheme {
    fn from(theme: &ThemeSource) -> Self {
        let schemes = theme
            .schemes()
            .into_iter()
            .map(|(name, scheme)| {
                let roles = scheme
                    .roles
                    .iter()
                    .map(|(role, argb)| (role.to_string(), hex_from_argb(*argb)))
                    .collect();
                (name.to_string(), roles)
            })
            .collect();

        let palettes = theme
            .palettes
            .iter()
            .map(|palette| {
                let tones = palette
                    .tones
                    .iter()
                    .enumerate()
                    .map(|(tone, argb)| (tone.to_string(), hex_from_argb(*argb)))
                    .collect();
                (palette.name.to_string(), tones)
            })
            .collect();

        Self {
            source: hex_from_argb(theme.source),
            schemes,
            palettes,
        }
    }
}
