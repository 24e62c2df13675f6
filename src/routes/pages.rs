//! Landing page handler.
//!
//! Serves the default HTML page for `/` and every otherwise-unmatched path.
//! There is deliberately no 404 here: the deployment template answers every
//! path with the landing page.

use axum::{extract::State, response::Html};

use crate::error::AppError;
use crate::state::AppState;
use crate::templates::LANDING_TEMPLATE;

/// Landing page handler, registered as the router fallback.
///
/// The app name and version go through Tera's HTML auto-escaping, so
/// environment-supplied values cannot inject markup into the page.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = tera::Context::new();
    context.insert("app_name", &state.config.app_name);
    context.insert("version", &state.config.version);

    let html = state.tera.render(LANDING_TEMPLATE, &context)?;
    Ok(Html(html))
}
