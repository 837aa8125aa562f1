use asset_viewer_core::ViewerConfig;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub async fn run(config: ViewerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let renderers = asset_viewer_runtime::build_default_renderers();
    let cancel_token = CancellationToken::new();

    let shutdown = cancel_token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutting down.");
        }
        shutdown.cancel();
    });

    info!("Press Ctrl+C to stop.");
    asset_viewer_server::run_server(&config, &renderers, cancel_token).await?;
    info!("Server stopped.");

    Ok(())
}
