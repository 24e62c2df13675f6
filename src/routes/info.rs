//! System info endpoint.
//!
//! Combines the startup configuration with live host introspection: the
//! toolchain that built the binary, hostname, platform, CPU architecture,
//! process uptime, and a memory snapshot taken at request time.

use axum::{extract::State, Json};
use serde::Serialize;
use sysinfo::System;

use crate::state::AppState;

/// Fallback when the host cannot report a hostname (sandboxed or otherwise
/// exotic environments).
const UNKNOWN_HOSTNAME: &str = "unknown";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// rustc version captured at build time (see build.rs).
const RUSTC_VERSION: &str = env!("UNRAID_APP_RUSTC_VERSION");

/// System info response body.
#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app: String,
    pub version: String,
    pub rust: &'static str,
    pub hostname: String,
    pub platform: &'static str,
    pub arch: &'static str,
    pub uptime: f64,
    pub memory: MemoryInfo,
}

/// Memory snapshot in whole megabytes, formatted as `"<N> MB"`.
#[derive(Debug, Serialize)]
pub struct MemoryInfo {
    pub total: String,
    pub free: String,
    pub used: String,
}

impl MemoryInfo {
    /// Build a snapshot from raw byte counts.
    ///
    /// `total` and `free` are rounded to whole megabytes first and `used` is
    /// their difference, so the three reported values always agree even when
    /// rounding would otherwise put them off by one.
    fn from_bytes(total_bytes: u64, free_bytes: u64) -> Self {
        let total_mb = (total_bytes as f64 / BYTES_PER_MB).round() as u64;
        let free_mb = (free_bytes.min(total_bytes) as f64 / BYTES_PER_MB).round() as u64;
        Self {
            total: format!("{} MB", total_mb),
            free: format!("{} MB", free_mb),
            used: format!("{} MB", total_mb - free_mb),
        }
    }
}

/// System info handler.
///
/// Never fails a request: unavailable host facts fall back to "unknown"
/// rather than producing an error status.
pub async fn info(State(state): State<AppState>) -> Json<InfoResponse> {
    let mut sys = System::new();
    sys.refresh_memory();

    Json(InfoResponse {
        app: state.config.app_name.clone(),
        version: state.config.version.clone(),
        rust: RUSTC_VERSION,
        hostname: System::host_name().unwrap_or_else(|| UNKNOWN_HOSTNAME.to_string()),
        platform: std::env::consts::OS,
        arch: std::env::consts::ARCH,
        uptime: state.uptime_seconds(),
        memory: MemoryInfo::from_bytes(sys.total_memory(), sys.free_memory()),
    })
}
