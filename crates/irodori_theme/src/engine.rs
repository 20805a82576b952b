//! Seed color → light/dark schemes and tonal palettes.
//!
//! This is the only module that talks to `material_color_utilities`. The seed's
//! hue and chroma fix six tonal palettes (the classic core palette); each
//! scheme role is one tone of one of those palettes. Everything downstream
//! works on [`ThemeSource`], which holds plain ARGB integers in a fixed order
//! so every artifact renders deterministically.

use irodori_constant::theme::MAX_TONE;
use material_color_utilities::{hct::Hct, palettes::TonalPalette as HctPalette};

/// Role names of a scheme, camelCase, in output order.
pub const SCHEME_ROLES: [&str; 29] = [
    "primary",
    "onPrimary",
    "primaryContainer",
    "onPrimaryContainer",
    "secondary",
    "onSecondary",
    "secondaryContainer",
    "onSecondaryContainer",
    "tertiary",
    "onTertiary",
    "tertiaryContainer",
    "onTertiaryContainer",
    "error",
    "onError",
    "errorContainer",
    "onErrorContainer",
    "background",
    "onBackground",
    "surface",
    "onSurface",
    "surfaceVariant",
    "onSurfaceVariant",
    "outline",
    "outlineVariant",
    "shadow",
    "scrim",
    "inverseSurface",
    "inverseOnSurface",
    "inversePrimary",
];

/// Source palette of a scheme role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Core {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
    Error,
}

/// `(palette, light tone, dark tone)` for each entry of [`SCHEME_ROLES`].
const ROLE_TONES: [(Core, u8, u8); 29] = [
    (Core::Primary, 40, 80),
    (Core::Primary, 100, 20),
    (Core::Primary, 90, 30),
    (Core::Primary, 10, 90),
    (Core::Secondary, 40, 80),
    (Core::Secondary, 100, 20),
    (Core::Secondary, 90, 30),
    (Core::Secondary, 10, 90),
    (Core::Tertiary, 40, 80),
    (Core::Tertiary, 100, 20),
    (Core::Tertiary, 90, 30),
    (Core::Tertiary, 10, 90),
    (Core::Error, 40, 80),
    (Core::Error, 100, 20),
    (Core::Error, 90, 30),
    (Core::Error, 10, 90),
    (Core::Neutral, 99, 10),
    (Core::Neutral, 10, 90),
    (Core::Neutral, 99, 10),
    (Core::Neutral, 10, 90),
    (Core::NeutralVariant, 90, 30),
    (Core::NeutralVariant, 30, 80),
    (Core::NeutralVariant, 50, 60),
    (Core::NeutralVariant, 80, 30),
    (Core::Neutral, 0, 0),
    (Core::Neutral, 0, 0),
    (Core::Neutral, 20, 90),
    (Core::Neutral, 95, 20),
    (Core::Primary, 80, 40),
];

/// Tonal palette names, camelCase, in output order.
pub const PALETTE_NAMES: [&str; 6] = [
    "primary",
    "secondary",
    "tertiary",
    "neutral",
    "neutralVariant",
    "error",
];

/// One scheme: `(role, argb)` in [`SCHEME_ROLES`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    pub roles: Vec<(&'static str, u32)>,
}

impl Scheme {
    pub fn get(&self, role: &str) -> Option<u32> {
        self.roles
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, argb)| *argb)
    }
}

/// A palette sampled at every tone `0..=100`; `tones[t]` is tone `t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TonalPalette {
    pub name: &'static str,
    pub tones: Vec<u32>,
}

impl TonalPalette {
    pub fn tone(&self, tone: u8) -> Option<u32> {
        self.tones.get(usize::from(tone)).copied()
    }
}

/// Everything the engine reports for one seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSource {
    pub source: u32,
    pub light: Scheme,
    pub dark: Scheme,
    pub palettes: Vec<TonalPalette>,
}

impl ThemeSource {
    /// Named schemes in output order.
    pub fn schemes(&self) -> [(&'static str, &Scheme); 2] {
        [("light", &self.light), ("dark", &self.dark)]
    }

    pub fn palette(&self, name: &str) -> Option<&TonalPalette> {
        self.palettes.iter().find(|p| p.name == name)
    }
}

/// The six palettes of a seed, in [`PALETTE_NAMES`] order.
struct CorePalette([HctPalette; 6]);

impl CorePalette {
    fn of(seed: u32) -> Self {
        let hct = Hct::from_int(seed);
        let (hue, chroma) = (hct.hue(), hct.chroma());
        Self([
            HctPalette::from_hue_and_chroma(hue, chroma.max(48.0)),
            HctPalette::from_hue_and_chroma(hue, 16.0),
            HctPalette::from_hue_and_chroma((hue + 60.0).rem_euclid(360.0), 24.0),
            HctPalette::from_hue_and_chroma(hue, 4.0),
            HctPalette::from_hue_and_chroma(hue, 8.0),
            HctPalette::from_hue_and_chroma(25.0, 84.0),
        ])
    }

    fn get(&self, core: Core) -> &HctPalette {
        &self.0[core as usize]
    }

    fn scheme(&self, is_dark: bool) -> Scheme {
        let roles = SCHEME_ROLES
            .iter()
            .zip(ROLE_TONES)
            .map(|(&role, (core, light, dark))| {
                let tone = if is_dark { dark } else { light };
                (role, self.get(core).tone(tone))
            })
            .collect();
        Scheme { roles }
    }

    fn sample(&self) -> Vec<TonalPalette> {
        PALETTE_NAMES
            .iter()
            .zip(&self.0)
            .map(|(&name, palette)| TonalPalette {
                name,
                tones: (0..=MAX_TONE).map(|tone| palette.tone(tone)).collect(),
            })
            .collect()
    }
}

/// Derives the light and dark schemes plus the six tonal palettes for an
/// opaque ARGB seed.
pub fn derive(seed: u32) -> ThemeSource {
    let core = CorePalette::of(seed);
    tracing::debug!(seed = format_args!("{seed:#010x}"), "theme derived");
    ThemeSource {
        source: seed,
        light: core.scheme(false),
        dark: core.scheme(true),
        palettes: core.sample(),
    }
}
