//! Pretty-JSON output to stdout or a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

/// Serializes `value` as pretty JSON and writes it to `path`, or prints
/// it to stdout when no path is given.
pub fn write_json<T: Serialize>(path: Option<PathBuf>, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;

    match path {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write output: {}", path.display()))?;
            info!(path = %path.display(), "output written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
