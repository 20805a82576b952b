//! `irodori refresh`: one manual run of the scheduled refresh.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::output;

#[derive(Serialize)]
struct RefreshRow {
    locale: String,
    colors: usize,
    stored_at: String,
}

pub async fn handle(db: Option<PathBuf>) -> Result<()> {
    let gateway = super::server_config(db).build_gateway()?;

    let spinner = output::spinner("Refreshing palettes from upstream...");
    let refreshed = match irodori_server::refresh_all(&gateway).await {
        Ok(refreshed) => {
            output::spinner_success(&spinner, "Palettes refreshed");
            refreshed
        }
        Err(e) => {
            output::spinner_error(&spinner, "Refresh failed");
            return Err(e.into());
        }
    };

    let rows: Vec<RefreshRow> = refreshed
        .iter()
        .map(|(locale, snapshot)| RefreshRow {
            locale: locale.to_string(),
            colors: snapshot.len(),
            stored_at: snapshot.last_update_at.to_rfc3339(),
        })
        .collect();

    let mut table = output::table(&["Locale", "Colors", "Stored at"]);
    for row in &rows {
        table.add_row(vec![
            row.locale.clone(),
            row.colors.to_string(),
            row.stored_at.clone(),
        ]);
    }
    output::table_print(&table, &rows);
    Ok(())
}
