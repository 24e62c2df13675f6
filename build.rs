use std::process::Command;

/// Captures the compiler version at build time so the /info endpoint can
/// report which toolchain produced the running binary.
fn main() {
    let rustc = std::env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    let version = Command::new(rustc)
        .arg("--version")
        .output()
        .ok()
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());

    println!("cargo:rustc-env=UNRAID_APP_RUSTC_VERSION={}", version);
    println!("cargo:rerun-if-changed=build.rs");
}
