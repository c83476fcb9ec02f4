use tokio::signal;
use tracing::{info, warn};

/// Wait for Ctrl+C.
///
/// All state is in memory, so there is nothing to flush; the caller stops
/// the server once this returns.
pub async fn listen_for_shutdown() {
    match signal::ctrl_c().await {
        Ok(()) => {
            info!("Shutdown signal received, stopping server...");
        }
        Err(e) => {
            warn!(
                "Failed to listen for Ctrl+C: {}. Proceeding with shutdown anyway.",
                e
            );
        }
    }
}
