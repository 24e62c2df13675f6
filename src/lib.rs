//! unraid-app: a sample HTTP server for Unraid deployment templates.
//!
//! Exposes a landing page, health check endpoints, and a system info
//! endpoint. Configuration comes entirely from environment variables so the
//! binary drops straight into a container template.

pub mod banner;
pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;
