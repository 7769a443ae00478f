//! Library half of the `rig-advisor` CLI.
//!
//! Commands live in [`commands`] as plain functions so tests can drive them
//! without spawning the binary.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

pub mod commands;

/// Canonicalize the root path if possible, falling back to the given string
/// relative to the current working directory.
pub fn canonicalize_or_current(root: &str) -> Result<PathBuf> {
    let path = Path::new(root);
    if path == Path::new(".") {
        Ok(env::current_dir().context("Failed to get current directory")?)
    } else {
        // The root may not exist yet (e.g., before `init`).
        match path.canonicalize() {
            Ok(p) => Ok(p),
            Err(_) => {
                let cwd = env::current_dir().context("Failed to get current directory")?;
                Ok(cwd.join(path))
            }
        }
    }
}

/// Infer an advisor name from the root path.
///
/// If the root has no final component (e.g., `/`), fallback to `rig-advisor`.
pub fn infer_advisor_name(root: &Path) -> String {
    root.file_name().and_then(|os_str| os_str.to_str()).unwrap_or("rig-advisor").to_string()
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` over `warn`.
pub fn init_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}
