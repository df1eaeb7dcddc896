use std::{
    fs::read_dir,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use tracing::{debug, warn};

/// The files belonging to one run.
///
/// `<name><log_suffix>` is the workload log, `<name><stats_suffix>` in the
/// same directory is its optional server stats dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunFiles {
    pub name: String,
    pub log_path: PathBuf,
    pub stats_path: PathBuf,
}

impl RunFiles {
    /// `None` unless the file name ends with `log_suffix` and has a
    /// non-empty run name before it
    pub fn from_log_path(log_path: &Path, log_suffix: &str, stats_suffix: &str) -> Option<Self> {
        let file_name = log_path.file_name()?.to_str()?;
        let name = file_name.strip_suffix(log_suffix)?;
        if name.is_empty() {
            return None;
        }
        let dir = log_path.parent().unwrap_or_else(|| Path::new(""));
        Some(Self {
            name: name.to_owned(),
            log_path: log_path.to_path_buf(),
            stats_path: dir.join(format!("{name}{stats_suffix}")),
        })
    }

    /// The companion stats dump, if it exists on disk
    pub fn stats_file(&self) -> Option<&Path> {
        self.stats_path.exists().then_some(self.stats_path.as_path())
    }
}

/// All runs in `dir`, ordered by file name
pub fn discover_runs(dir: &Path, log_suffix: &str, stats_suffix: &str) -> Result<Vec<RunFiles>> {
    let mut runs = Vec::new();
    for entry in read_dir(dir).context(format!("List results directory {}", dir.display()))? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if path.file_name().and_then(|n| n.to_str()).is_none() {
            warn!("Skipping non UTF-8 file name {}", path.display());
            continue;
        }
        if let Some(run) = RunFiles::from_log_path(&path, log_suffix, stats_suffix) {
            debug!("Found run {} at {}", run.name, run.log_path.display());
            runs.push(run);
        }
    }
    runs.sort_by(|a, b| a.log_path.cmp(&b.log_path));
    Ok(runs)
}
