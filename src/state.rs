//! Shared application state for request handlers.

use std::sync::Arc;
use std::time::Instant;

use tera::Tera;

use crate::config::AppConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the immutable configuration, the Tera template engine, and the
/// process start instant used for uptime reporting. Handlers never mutate
/// any of it.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
    started_at: Instant,
}

impl AppState {
    /// Creates a new application state from the given configuration and templates.
    pub fn new(config: AppConfig, tera: Tera) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
            started_at: Instant::now(),
        }
    }

    /// Seconds elapsed since the server process started.
    pub fn uptime_seconds(&self) -> f64 {
        self.started_at.elapsed().as_secs_f64()
    }
}
