use std::{fs::read_to_string, path::Path};

use eyre::{Context, Result};
use tracing::debug;


pub use result::{MetricRecord, parse_output};

/// Read one workload-summary log and extract its metrics.
///
/// An unreadable file is an error; a readable file without any metrics
/// gives an empty [`MetricRecord`].
pub fn read_log(path: &Path) -> Result<MetricRecord> {
    let output =
        read_to_string(path).context(format!("Read workload log {}", path.display()))?;
    let record = parse_output(&output)?;
    debug!(
        "Parsed {}: throughput {} ops/sec, {} operations",
        path.display(),
        record.throughput,
        record.operations.len()
    );
    Ok(record)
}
