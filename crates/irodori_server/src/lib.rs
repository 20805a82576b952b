//! irodori HTTP API.
//!
//! - `GET /cn/`, `GET /jp/`: cached traditional palettes ([`gateway`])
//! - `GET /m3/?hex=&type=css|tailwindcss|unocss[&themeName=]`: Material 3 themes
//! - anything else: `404 {"success":false,"error":"Route not found"}`
//!
//! [`serve`] runs the router next to the scheduled refresh until the shutdown
//! future resolves.

pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod router;
pub mod scheduler;
pub mod state;

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;

pub use config::{BucketConfig, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use gateway::PaletteGateway;
pub use router::build_router;
pub use scheduler::{refresh_all, spawn_refresh_loop};
pub use state::AppState;

/// Binds `config.bind` and serves until `shutdown` completes.
pub async fn serve(
    config: ServerConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let gateway = Arc::new(config.build_gateway()?);
    let refresher = config
        .refresh_enabled()
        .then(|| spawn_refresh_loop(Arc::clone(&gateway), config.refresh_interval));

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("bind {}", config.bind))?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        addr = %local_addr,
        bucket = gateway.bucket().backend(),
        "irodori listening"
    );

    let router = build_router(AppState {
        gateway: Arc::clone(&gateway),
    });
    let served = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("http server");

    if let Some(refresher) = refresher {
        refresher.abort();
    }
    tracing::info!("irodori stopped");
    served
}
