//! Pulseboard reader — binary entrypoint.
//! Boots the Axum HTTP server that fetches the pre-generated feeds and
//! serves the rendered pages.

use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use pulseboard::api::{create_router, AppState};
use pulseboard::fetch::DocumentFetcher;
use pulseboard::prefs::FilePrefs;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pulseboard=info,warn")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);

    // Where the generated feeds live. Defaults to this server's own /data
    // mount, so a single process can host both the JSON and the pages.
    let base = std::env::var("PULSE_DATA_URL").unwrap_or_else(|_| format!("http://127.0.0.1:{port}"));
    let prefs_path =
        std::env::var("PULSE_PREFS_PATH").unwrap_or_else(|_| "data/prefs.json".to_string());
    let static_root = std::env::var("PULSE_STATIC_ROOT").unwrap_or_else(|_| ".".to_string());

    let state = AppState::new(DocumentFetcher::new(base), FilePrefs::open(&prefs_path));
    let router = create_router(state, static_root.into());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("binding listener")?;
    axum::serve(listener, router).await.context("serving")?;

    Ok(())
}
