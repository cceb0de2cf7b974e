//! WebFiler - Remote file manager backend
//!
//! Main entry point for the HTTP server.

use anyhow::Result;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging and panic hook first
    app_log::init()?;

    let config = app_api::AppConfig::load().unwrap_or_default();

    if let Err(e) = app_log::cleanup_old_logs(config.log.retention_days) {
        tracing::warn!("Failed to cleanup old logs: {}", e);
    }

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("WebFiler listening on {}", addr);

    axum::serve(listener, app_api::router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("WebFiler stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Received termination signal, shutting down");
}
