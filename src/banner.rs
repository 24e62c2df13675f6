//! Startup banner written to stdout once the listener is bound.
//!
//! Operators grep container logs for this box to confirm the app came up,
//! so it goes to stdout directly rather than through the tracing pipeline.

use crate::config::AppConfig;

/// Inner width of the banner box in characters.
const INNER_WIDTH: usize = 60;

/// Render the fixed-width startup banner.
///
/// Lists the app identity, the listen address, and the three endpoints.
/// Every line of the box has the same character width as long as the
/// content fits; oversized values simply widen their own line.
pub fn render(config: &AppConfig, port: u16) -> String {
    let mut lines = Vec::new();
    lines.push(format!("╔{}╗", "═".repeat(INNER_WIDTH)));
    lines.push(blank());
    lines.push(line(&config.app_name));
    lines.push(line(&format!("Version: {}", config.version)));
    lines.push(blank());
    lines.push(line(&format!(
        "Server listening on http://0.0.0.0:{}",
        port
    )));
    lines.push(blank());
    lines.push(line("Endpoints:"));
    lines.push(line("  GET /         - Web interface"));
    lines.push(line("  GET /health   - Health check"));
    lines.push(line("  GET /info     - System info"));
    lines.push(blank());
    lines.push(format!("╚{}╝", "═".repeat(INNER_WIDTH)));
    lines.join("\n")
}

fn blank() -> String {
    format!("║{}║", " ".repeat(INNER_WIDTH))
}

fn line(text: &str) -> String {
    format!("║   {:<width$}║", text, width = INNER_WIDTH - 3)
}
