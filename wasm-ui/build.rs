//! Build script to capture build information.
//!
//! Sets environment variables at compile time:
//! - BUILD_COMMIT: short git commit SHA
//! - BUILD_TIMESTAMP: ISO 8601 timestamp
//!
//! `P2PSTORE_*` settings are read by the app through `option_env!`, so a
//! change to any of them triggers a rebuild.

use std::process::Command;

const SETTINGS: &[&str] = &[
    "P2PSTORE_API_URL",
    "P2PSTORE_CHAT",
    "P2PSTORE_INITIAL_MSG_ID",
    "P2PSTORE_VIEWER_USERNAME",
    "P2PSTORE_VIEWER_NAME",
    "P2PSTORE_VIEWER_IMAGE",
];

fn main() {
    // Get git short SHA
    let commit = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string());

    // Get ISO timestamp
    let timestamp = Command::new("date")
        .arg("-u")
        .arg("+%Y-%m-%dT%H:%M:%SZ")
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    println!("cargo:rustc-env=BUILD_COMMIT={}", commit);
    println!("cargo:rustc-env=BUILD_TIMESTAMP={}", timestamp);

    for key in SETTINGS {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=../.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
}
