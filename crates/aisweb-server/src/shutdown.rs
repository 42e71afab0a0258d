//! Signal handling for graceful shutdown.
//!
//! - SIGINT (Ctrl-C): graceful shutdown
//! - SIGTERM: graceful shutdown (unix only)

use tracing::{info, warn};

/// Resolves when the process is asked to stop.
///
/// A signal that cannot be listened for is logged and ignored; the other
/// one still triggers shutdown.
pub async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => info!("Received SIGINT, initiating shutdown"),
        _ = terminate => info!("Received SIGTERM, initiating shutdown"),
    }
}
