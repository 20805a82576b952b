//! `irodori theme`: derive a theme offline.

use std::path::PathBuf;

use anyhow::{Context, Result};
use irodori_theme::{ThemeArtifact, ThemeFormat, derive_theme};

use crate::output;

/// Artifact body as written to disk or stdout.
fn render(artifact: &ThemeArtifact) -> Result<String> {
    Ok(match artifact {
        ThemeArtifact::Json(theme) => serde_json::to_string_pretty(theme)? + "\n",
        ThemeArtifact::Css(theme) => serde_json::to_string_pretty(theme)? + "\n",
        ThemeArtifact::Preset(preset) => preset.source.clone(),
    })
}

pub fn handle(
    hex: &str,
    format: ThemeFormat,
    theme_name: Option<&str>,
    out: Option<PathBuf>,
) -> Result<()> {
    let artifact = derive_theme(hex, format, theme_name)?;
    let body = render(&artifact)?;

    // A preset defaults to its suggested filename when written to a directory.
    let out = match (out, &artifact) {
        (Some(dir), ThemeArtifact::Preset(preset)) if dir.is_dir() => Some(dir.join(&preset.filename)),
        (out, _) => out,
    };

    match out {
        Some(path) => {
            std::fs::write(&path, &body)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            output::success(&format!("{format} theme written to {}", path.display()));
        }
        None if output::is_json() => match &artifact {
            ThemeArtifact::Json(theme) => output::data(format.as_str(), theme),
            ThemeArtifact::Css(theme) => output::data(format.as_str(), theme),
            ThemeArtifact::Preset(preset) => output::data(
                format.as_str(),
                &serde_json::json!({ "filename": preset.filename, "source": preset.source }),
            ),
        },
        None => print!("{body}"),
    }
    Ok(())
}
