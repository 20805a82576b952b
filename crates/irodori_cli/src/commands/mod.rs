//! Command dispatch.

pub mod palette;
pub mod refresh;
pub mod serve;
pub mod theme;

use std::path::PathBuf;

use anyhow::Result;
use irodori_server::ServerConfig;

use crate::cli::{Cli, Command};

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Serve {
            bind,
            db,
            ephemeral,
            refresh_secs,
        } => serve::handle(bind, db, ephemeral, refresh_secs).await,
        Command::Refresh { db } => refresh::handle(db).await,
        Command::Palette { locale, limit, db } => palette::handle(locale, limit, db).await,
        Command::Theme {
            hex,
            format,
            theme_name,
            out,
        } => theme::handle(&hex, format, theme_name.as_deref(), out),
    }
}

/// Environment configuration with an optional `--db` override.
fn server_config(db: Option<PathBuf>) -> ServerConfig {
    let config = ServerConfig::from_env();
    match db {
        Some(path) => config.with_db_path(path),
        None => config,
    }
}
