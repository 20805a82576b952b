//! `irodori serve`

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use irodori_server::BucketConfig;

use crate::output;

pub async fn handle(
    bind: Option<String>,
    db: Option<PathBuf>,
    ephemeral: bool,
    refresh_secs: Option<u64>,
) -> Result<()> {
    let mut config = super::server_config(db);
    if let Some(bind) = bind {
        config = config.with_bind(bind);
    }
    if ephemeral {
        config = config.with_ephemeral();
    }
    if let Some(secs) = refresh_secs {
        config = config.with_refresh_interval(Duration::from_secs(secs));
    }

    output::header("irodori");
    output::kv("bind", &config.bind);
    match &config.bucket {
        BucketConfig::Sqlite(path) => output::kv("bucket", &path.display().to_string()),
        BucketConfig::Memory => output::kv("bucket", "memory (ephemeral)"),
    }
    if config.refresh_enabled() {
        output::kv("refresh", &format!("every {}s", config.refresh_interval.as_secs()));
    } else {
        output::kv("refresh", "disabled");
    }

    irodori_server::serve(config, shutdown_signal()).await?;
    output::success("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
