//! HTTP server lifecycle.
//!
//! Binds the router on all interfaces, prints the startup banner once the
//! listener is up, and drains in-flight connections on SIGTERM/SIGINT
//! before exiting.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
