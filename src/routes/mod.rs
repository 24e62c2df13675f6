//! HTTP route handlers.
//!
//! Three fixed paths are served: `/health` (with its `/healthz` alias),
//! `/info`, and a catch-all landing page for everything else. Routing is
//! path-only: any HTTP method on a matched path gets the same response, and
//! no path produces a 404. That mirrors the deployment template's contract
//! of always answering 200.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod health;
pub mod info;
pub mod pages;

use axum::{middleware, routing::any, Router};

use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes.
///
/// The landing page is registered as the fallback, so every path outside
/// the health and info endpoints renders the same HTML page.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", any(health::health))
        .route("/healthz", any(health::health))
        .route("/info", any(info::info))
        .fallback(pages::index)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
