//! `irodori palette <cn|jp>`

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Cell;
use irodori_core::{ColorRecord, Locale};
use serde_json::Value;

use crate::output;

pub async fn handle(locale: Locale, limit: Option<usize>, db: Option<PathBuf>) -> Result<()> {
    let gateway = super::server_config(db).build_gateway()?;

    let spinner = output::spinner(&format!("Loading {locale} palette..."));
    let snapshot = match gateway.get(locale).await {
        Ok(snapshot) => {
            spinner.finish_and_clear();
            snapshot
        }
        Err(e) => {
            output::spinner_error(&spinner, &format!("Could not load {locale} palette"));
            return Err(e.into());
        }
    };

    let entries: Vec<Value> = snapshot
        .colors
        .as_array()
        .map(|colors| colors.iter().take(limit.unwrap_or(usize::MAX)).cloned().collect())
        .unwrap_or_default();

    if output::is_json() {
        output::data(
            locale.as_str(),
            &serde_json::json!({
                "colors": entries,
                "lastUpdateAt": snapshot.last_update_at,
                "total": snapshot.len(),
            }),
        );
        return Ok(());
    }

    output::header(&format!("{locale} palette"));
    output::kv("colors", &snapshot.len().to_string());
    output::kv("updated", &snapshot.last_update_at.to_rfc3339());

    let mut table = output::table(&["", "Name", "Pinyin", "Hex", "RGB"]);
    for entry in &entries {
        // Cached payloads are passed through unchecked; show what parses.
        match serde_json::from_value::<ColorRecord>(entry.clone()) {
            Ok(record) => {
                let [r, g, b] = record.rgb;
                table.add_row(vec![
                    output::swatch(record.rgb),
                    Cell::new(&record.name),
                    Cell::new(record.pinyin.as_deref().unwrap_or("")),
                    Cell::new(&record.hex),
                    Cell::new(format!("{r} {g} {b}")),
                ]);
            }
            Err(_) => {
                table.add_row(vec![
                    Cell::new(""),
                    Cell::new(entry.to_string()),
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(""),
                ]);
            }
        }
    }
    println!("{table}");
    if entries.len() < snapshot.len() {
        output::dim(&format!("showing {} of {}", entries.len(), snapshot.len()));
    }
    Ok(())
}
