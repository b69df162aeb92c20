//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream client and pageview service, then runs the Axum server
//! until SIGINT/SIGTERM.

use crate::application::services::PageviewService;
use crate::config::Config;
use crate::infrastructure::http::ReqwestClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Builds the production [`PageviewService`] from configuration.
///
/// # Errors
///
/// Returns an error if the upstream settings are invalid or the HTTP client
/// cannot be created.
pub fn build_pageview_service(config: &Config) -> Result<PageviewService> {
    let client = ReqwestClient::new().context("Failed to create upstream HTTP client")?;

    Ok(PageviewService::new(
        Arc::new(client),
        config.upstream_url()?,
        config.user_agent_header()?,
        Duration::from_secs(config.upstream_timeout_secs),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The upstream client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let service = build_pageview_service(&config)?;
    tracing::info!("Upstream client ready");

    let state = AppState::new(Arc::new(service));

    let app = app_router(
        state,
        config.rate_limit_per_second,
        config.rate_limit_burst,
    );

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
