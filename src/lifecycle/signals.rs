//! OS signal handling.

use std::sync::Arc;

use crate::lifecycle::Shutdown;

/// Trigger `shutdown` on the first Ctrl-C.
pub async fn shutdown_on_ctrl_c(shutdown: Arc<Shutdown>) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl-C");
            shutdown.trigger();
        }
        Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl-C"),
    }
}
