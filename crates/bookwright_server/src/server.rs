//! HTTP listener lifecycle.

use crate::{AppState, BookwrightConfig, create_router};
use bookwright_error::{BookwrightResult, ServerError, ServerErrorKind};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Binds the configured address and serves until Ctrl-C.
///
/// # Errors
///
/// Fails when no credentials are configured, when the generator or database
/// cannot be set up, or when the address cannot be bound.
#[instrument(skip(config), fields(address = %config.server().address()))]
pub async fn serve(config: &BookwrightConfig) -> BookwrightResult<()> {
    if config.credentials().is_empty() {
        return Err(ServerError::new(ServerErrorKind::NotConfigured(
            "no credentials configured; nobody could log in".to_string(),
        ))
        .into());
    }

    let state = AppState::from_config(config)?;
    let address = config.server().address();
    let listener = TcpListener::bind(&address).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            address: address.clone(),
            message: e.to_string(),
        })
    })?;

    info!(
        %address,
        source = %state.generator().source(),
        persistence = state.repository().is_some(),
        "Bookwright listening"
    );

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown requested");
}
