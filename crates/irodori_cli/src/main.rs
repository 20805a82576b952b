//! CLI entry point for irodori.

mod cli;
mod commands;
mod output;

use std::path::Path;

use clap::Parser;
use irodori_constant::app;
use irodori_observability::ObservabilityConfig;

use crate::cli::Cli;

/// Loads `.env`-style files without overriding variables already set.
/// Order: 1) ~/.irodori/env  2) nearest `.env` from the working directory upwards
fn load_env_files() {
    if let Some(home) = dirs::home_dir() {
        let user_env = home.join(app::DATA_DIR).join("env");
        if user_env.exists() {
            let _ = dotenvy::from_path(&user_env);
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut dir: Option<&Path> = Some(cwd.as_path());
        while let Some(current) = dir {
            let env_file = current.join(".env");
            if env_file.exists() {
                let _ = dotenvy::from_path(&env_file);
                break;
            }
            dir = current.parent();
        }
    }
}

fn observability_config(cli: &Cli) -> ObservabilityConfig {
    let config = ObservabilityConfig::from_env()
        .with_version(app::VERSION)
        .with_verbose(cli.verbose);
    // One-shot commands stay quiet unless asked; the server logs at info.
    if config.log_filter.is_none() && !cli.verbose && !cli.command.is_serve() {
        config.with_log_filter("warn")
    } else {
        config
    }
}

#[tokio::main]
async fn main() {
    load_env_files();
    let cli = Cli::parse();
    output::init(cli.output);

    let telemetry = match irodori_observability::init(observability_config(&cli)) {
        Ok(guard) => Some(guard),
        Err(e) => {
            output::error(&format!("logging disabled: {e}"));
            None
        }
    };

    let result = commands::handle(cli).await;
    drop(telemetry);

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
