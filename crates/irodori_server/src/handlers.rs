//! Route handlers.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use irodori_core::{Locale, PaletteSnapshot};
use irodori_theme::{Preset, ThemeArtifact, ThemeFormat, derive_theme};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub async fn cn_palette(State(state): State<AppState>) -> ApiResult<Json<PaletteSnapshot>> {
    Ok(Json(state.gateway.get(Locale::Cn).await?))
}

pub async fn jp_palette(State(state): State<AppState>) -> ApiResult<Json<PaletteSnapshot>> {
    Ok(Json(state.gateway.get(Locale::Jp).await?))
}

/// `/m3/` query string. Every field is optional at the extractor level so a
/// missing parameter gets the JSON error body instead of axum's plain-text
/// rejection.
#[derive(Debug, Default, Deserialize)]
pub struct M3Query {
    pub hex: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(rename = "themeName")]
    pub theme_name: Option<String>,
}

fn required<'a>(value: &'a Option<String>, name: &str) -> ApiResult<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("missing query parameter {name}")))
}

pub async fn m3_theme(Query(query): Query<M3Query>) -> ApiResult<Response> {
    let hex = required(&query.hex, "hex")?.to_string();
    let format: ThemeFormat = required(&query.kind, "type")?.parse()?;
    let theme_name = query.theme_name.filter(|n| !n.is_empty());

    tracing::debug!(hex = %hex, format = %format, "deriving theme");
    let artifact =
        tokio::task::spawn_blocking(move || derive_theme(&hex, format, theme_name.as_deref()))
            .await??;

    Ok(match artifact {
        ThemeArtifact::Json(theme) => Json(theme).into_response(),
        ThemeArtifact::Css(theme) => Json(theme).into_response(),
        ThemeArtifact::Preset(preset) => (
            [
                (header::CONTENT_TYPE, Preset::CONTENT_TYPE.to_string()),
                (header::CONTENT_DISPOSITION, preset.content_disposition()),
            ],
            preset.source,
        )
            .into_response(),
    })
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
