//! `cn` palette: the upstream already serves the target shape.

use crate::error::Result;
use crate::Upstream;

/// Returns the upstream JSON text unmodified; its shape is not re-validated.
pub async fn fetch_china_colors(upstream: &Upstream) -> Result<String> {
    upstream.get_text(&upstream.config().cn_url).await
}
