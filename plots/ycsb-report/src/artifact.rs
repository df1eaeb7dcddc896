use std::{
    fs::{read_to_string, write},
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use eyre::{Context, Result};
use tracing::info;

use crate::RunResult;

pub fn artifact_name(prefix: &str, generated: DateTime<Local>) -> String {
    format!("{prefix}_{}.json", generated.format("%Y%m%d_%H%M%S"))
}

/// Write the sorted results into `dir`, returning the artifact path
pub fn write_json(
    results: &[RunResult],
    dir: &Path,
    prefix: &str,
    generated: DateTime<Local>,
) -> Result<PathBuf> {
    let path = dir.join(artifact_name(prefix, generated));
    let data = serde_json::to_string_pretty(results)?;
    write(&path, data).context(format!("Write JSON report {}", path.display()))?;
    info!("Wrote {} runs to {}", results.len(), path.display());
    Ok(path)
}

pub fn read_json(path: &Path) -> Result<Vec<RunResult>> {
    let data = read_to_string(path).context(format!("Read JSON report {}", path.display()))?;
    serde_json::from_str(&data).context("Parse JSON report")
}
