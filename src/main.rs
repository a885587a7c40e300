use blog_search::app::router;
use blog_search::config::Settings;
use blog_search::storage::memory::BlogStore;
use blog_search::storage::seed::seed_demo;
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::parse();
    tracing::info!(
        "Page size {}, load-more fallback page {}, match policy {:?}, search fields {:?}",
        settings.page_size(),
        settings.fallback_page,
        settings.match_policy,
        settings.search_fields
    );

    let store = Arc::new(BlogStore::new());
    if settings.seed_demo {
        seed_demo(&store)?;
    }

    let bind_addr = settings.bind;
    let app = router(store, settings);

    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(tokio::signal::ctrl_c()))
        .await?;

    Ok(())
}

/// Resolves once `signal` fires. If the handler cannot be installed the
/// server keeps running instead of stopping at once.
async fn shutdown_signal(signal: impl Future<Output = std::io::Result<()>>) {
    if let Err(err) = signal.await {
        tracing::error!("Failed to listen for Ctrl+C, graceful shutdown disabled: {}", err);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_shutdown_on_signal() {
        let done = tokio::time::timeout(Duration::from_millis(100), shutdown_signal(async { Ok(()) })).await;
        assert!(done.is_ok());
    }

    #[tokio::test]
    async fn test_failed_signal_handler_keeps_server_running() {
        let failed = async { Err(std::io::Error::other("no signal driver")) };

        let done = tokio::time::timeout(Duration::from_millis(100), shutdown_signal(failed)).await;
        assert!(done.is_err());
    }
}
