use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mobie2text::server::{create_router, AppState};
use mobie2text::{utils, Cli, Settings, WhisperClient, YtDlpFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose {
        "mobie2text=debug"
    } else {
        "mobie2text=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Check for required external dependencies (non-fatal; tools may appear later)
    let missing_deps = utils::check_dependencies().await;
    for dep in &missing_deps {
        tracing::warn!("Missing dependency: {}", dep);
    }

    let settings = Settings::from_cli(&cli);

    let state = AppState {
        fetcher: Arc::new(YtDlpFetcher::new(settings.yt_dlp_path.clone())),
        transcriber: Arc::new(WhisperClient::new(settings.whisper.clone())),
        settings,
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
