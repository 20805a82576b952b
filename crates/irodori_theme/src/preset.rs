//! UnoCSS preset module for a theme.
//!
//! The kebab-case CSS map is handed to a handlebars template together with the
//! alias and selector tables; the rendered text then goes through
//! [`format_source`], which rejects anything that is not valid TypeScript.

use std::sync::OnceLock;

use handlebars::{Handlebars, handlebars_helper};
use irodori_constant::theme::{COLOR_SELECTORS, DARK_SUFFIX_KEBAB, SCHEME_ALIASES};
use regex::Regex;
use serde_json::json;

use crate::css::{CssValue, KeyStyle, css_theme, kebab_case};
use crate::engine::ThemeSource;
use crate::error::{Result, ThemeError};
use crate::format::format_source;

const TEMPLATE: &str = include_str!("../templates/unocss_preset.ts.hbs");

/// A rendered preset, ready to be served as a download or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub theme_name: String,
    pub filename: String,
    pub source: String,
}

impl Preset {
    pub const CONTENT_TYPE: &'static str = "application/javascript";

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

fn theme_name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("theme name pattern is valid"))
}

/// Theme names end up inside a regex literal, class names and a filename, so
/// only `[A-Za-z][A-Za-z0-9]*` is accepted.
pub fn validate_theme_name(name: &str) -> Result<&str> {
    if theme_name_regex().is_match(name) {
        Ok(name)
    } else {
        Err(ThemeError::InvalidThemeName(name.to_string()))
    }
}

pub fn preset_filename(theme_name: &str) -> String {
    format!("md3-{theme_name}-preset.ts")
}

fn register_helpers(handlebars: &mut Handlebars<'static>) {
    handlebars_helper!(join: |list: Vec<String>, sep: str| list.join(sep));

    handlebars_helper!(quote_and_join: |list: Vec<String>| {
        list.iter()
            .map(|s| format!("'{s}'"))
            .collect::<Vec<_>>()
            .join(", ")
    });

    handlebars.register_helper("join", Box::new(join));
    handlebars.register_helper("quote-and-join", Box::new(quote_and_join));
}

pub fn render_preset(theme: &ThemeSource, theme_name: &str) -> Result<Preset> {
    render(TEMPLATE, theme, theme_name)
}

fn render(template: &str, theme: &ThemeSource, theme_name: &str) -> Result<Preset> {
    let theme_name = validate_theme_name(theme_name)?;
    let colors = css_theme(theme, KeyStyle::Kebab);

    let dark_roles: Vec<&str> = colors
        .keys()
        .filter(|key| colors.contains_key(&format!("{key}{DARK_SUFFIX_KEBAB}")))
        .map(String::as_str)
        .collect();
    // Palettes without a DEFAULT entry only make sense with an explicit tone.
    let tone_only: Vec<&str> = colors
        .iter()
        .filter(|(_, value)| matches!(value, CssValue::Palette(tones) if !tones.contains_key("DEFAULT")))
        .map(|(key, _)| key.as_str())
        .collect();
    let aliases: Vec<_> = SCHEME_ALIASES
        .iter()
        .map(|(code, name)| json!({ "code": code, "name": kebab_case(name) }))
        .collect();
    let alias_codes: Vec<&str> = SCHEME_ALIASES.iter().map(|(code, _)| *code).collect();

    let data = json!({
        "theme_name": theme_name,
        "preset_name": format!("md3-{theme_name}-preset"),
        "selectors": COLOR_SELECTORS,
        "aliases": aliases,
        "alias_codes": alias_codes,
        "dark_roles": dark_roles,
        "tone_only": tone_only,
        "colors": serde_json::to_string_pretty(&colors)?,
    });

    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    register_helpers(&mut handlebars);
    let rendered = handlebars.render_template(template, &data)?;

    tracing::debug!(theme_name, bytes = rendered.len(), "preset rendered");
    Ok(Preset {
        theme_name: theme_name.to_string(),
        filename: preset_filename(theme_name),
        source: format_source(&rendered)?,
    })
}
