//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use irodori_core::Locale;
use irodori_theme::ThemeFormat;

/// Traditional color palettes and Material Design 3 themes
#[derive(Parser, Debug)]
#[command(name = "irodori", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for scripts
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the HTTP API with the scheduled palette refresh
    Serve {
        /// Listen address (default: IRODORI_BIND or 127.0.0.1:8787)
        #[arg(long)]
        bind: Option<String>,
        /// Palette bucket DB (default: IRODORI_DB_PATH or ./.irodori/irodori.db)
        #[arg(long, conflicts_with = "ephemeral")]
        db: Option<PathBuf>,
        /// Keep palettes in memory only
        #[arg(long)]
        ephemeral: bool,
        /// Seconds between scheduled refreshes; 0 disables them (default: one day)
        #[arg(long)]
        refresh_secs: Option<u64>,
    },
    /// Re-fetch every palette and overwrite the bucket once
    Refresh {
        /// Palette bucket DB (default: IRODORI_DB_PATH or ./.irodori/irodori.db)
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Show a traditional palette, fetching it on a cache miss
    Palette {
        /// Locale: cn or jp
        locale: Locale,
        /// Show only the first N colors
        #[arg(short, long)]
        limit: Option<usize>,
        /// Palette bucket DB (default: IRODORI_DB_PATH or ./.irodori/irodori.db)
        #[arg(long)]
        db: Option<PathBuf>,
    },
    /// Derive a Material Design 3 theme from a seed color
    Theme {
        /// Seed color, #RGB or #RRGGBB
        #[arg(long)]
        hex: String,
        /// Artifact: css, tailwindcss or unocss
        #[arg(short = 't', long = "type", default_value = "css")]
        format: ThemeFormat,
        /// Theme name used by the unocss preset
        #[arg(long)]
        theme_name: Option<String>,
        /// Write the artifact to this file instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Command {
    pub fn is_serve(&self) -> bool {
        matches!(self, Command::Serve { .. })
    }
}
