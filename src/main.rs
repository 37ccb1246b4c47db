//! loadboard server binary

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use loadboard::config::AppConfig;
use loadboard::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;
    let state = AppState::in_memory();
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %config.addr(), "loadboard listening");

    axum::serve(listener, app).await?;
    Ok(())
}
