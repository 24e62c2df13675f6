//! Graceful shutdown and signal handling.
//!
//! SIGTERM and SIGINT both route through the same shutdown path: stop
//! accepting new connections, let in-flight requests finish, then let the
//! process exit 0.

use std::time::Duration;

use axum_server::Handle;

/// How long to wait for in-flight connections before forcing the exit.
const DRAIN_DEADLINE: Duration = Duration::from_secs(30);

/// Setup graceful shutdown on SIGTERM and SIGINT.
///
/// When either signal is received, the server will:
/// 1. Stop accepting new connections
/// 2. Wait for existing connections to complete
/// 3. Shutdown gracefully
pub fn setup_shutdown_handler(handle: Handle) {
    tokio::spawn(async move {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                tracing::info!("Received Ctrl+C, shutting down gracefully");
            }
            _ = terminate => {
                tracing::info!("Received SIGTERM, shutting down gracefully");
            }
        }

        handle.graceful_shutdown(Some(DRAIN_DEADLINE));
    });
}
