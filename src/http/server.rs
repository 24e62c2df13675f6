//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::banner;
use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),
}

/// Start the HTTP server on all interfaces.
///
/// Blocks until the server shuts down gracefully. A failure to bind (for
/// example, port already in use) is returned to the caller; there is no
/// retry.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let handle = Handle::new();

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    // Print the banner once the listener is actually bound. `listening()`
    // resolves to None if the bind fails, in which case serve() below
    // surfaces the error.
    tokio::spawn({
        let handle = handle.clone();
        let config = config.clone();
        async move {
            if let Some(addr) = handle.listening().await {
                println!("{}", banner::render(&config, addr.port()));
                tracing::info!(%addr, "Server listening");
            }
        }
    });

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
