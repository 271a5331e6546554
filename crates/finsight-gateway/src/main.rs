//! finsight gateway
//!
//! - `POST /api/company` : company symbol + placeholder financials
//! - `GET /healthz`, `GET /metrics`
//! - Optional `finsight.yaml` in the working directory; defaults otherwise

use std::path::Path;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use finsight_core::error::{FinsightError, Result};
use finsight_gateway::{app_state::AppState, config, router};

#[tokio::main]
async fn main() -> Result<()> {
    let path = Path::new(config::DEFAULT_PATH);
    let loaded = config::load_optional(path)?;
    let from_file = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let default_filter = if cfg.gateway.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(fmt::layer())
        .init();

    if from_file {
        tracing::info!(path = %path.display(), "config loaded");
    } else {
        tracing::info!(path = %path.display(), "config file not found, using defaults");
    }

    let listen = cfg.gateway.listen_addr()?;
    let state = AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "finsight-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| FinsightError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FinsightError::Internal(format!("server failed: {e}")))?;

    tracing::info!("finsight-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, starting graceful shutdown");
}
