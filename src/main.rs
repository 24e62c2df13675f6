//! unraid-app: a sample HTTP server for Unraid deployment templates.
//!
//! This is the application entry point. It initializes tracing, reads
//! configuration from the environment, builds the router, and serves HTTP
//! until a termination signal drains the listener.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use unraid_app::config::{AppConfig, DEFAULT_LOG_FILTER};
use unraid_app::http::start_server;
use unraid_app::routes::create_router;
use unraid_app::state::AppState;
use unraid_app::templates::init_templates;

/// Sample HTTP server for Unraid deployment templates
#[derive(Parser, Debug)]
#[command(name = "unraid-app", version, about)]
struct Args {
    /// Log level filter (e.g., "unraid_app=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Read configuration from the environment, once. Handlers only ever see
    // the immutable snapshot.
    let config = AppConfig::from_env()?;
    tracing::info!(
        app_name = %config.app_name,
        version = %config.version,
        port = config.port,
        "Loaded configuration"
    );

    let tera = init_templates()?;

    let state = AppState::new(config.clone(), tera);
    let app = create_router(state);

    if let Err(e) = start_server(app, &config).await {
        tracing::error!(error = %e, "Server failed");
        return Err(e.into());
    }

    Ok(())
}
