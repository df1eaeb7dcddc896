use std::{
    fs::read_to_string,
    path::{Path, PathBuf},
};

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{DEFAULT_RESULTS_DIR, LOG_SUFFIX, STATS_SUFFIX};

/// Settings for one analysis pass. Every field has a default, so an empty
/// YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyzeConfig {
    pub results_dir: PathBuf,
    /// Suffix identifying workload-summary logs, stripped to get the run name
    pub log_suffix: String,
    /// Suffix appended to the run name to find the server stats dump
    pub stats_suffix: String,
    /// Maximum characters of the run name shown in the ranking table
    pub name_width: usize,
    pub json_prefix: String,
}

impl Default for AnalyzeConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from(DEFAULT_RESULTS_DIR),
            log_suffix: LOG_SUFFIX.to_owned(),
            stats_suffix: STATS_SUFFIX.to_owned(),
            name_width: 38,
            json_prefix: "analysis".to_owned(),
        }
    }
}

impl AnalyzeConfig {
    pub fn from_yaml(data: &str) -> Result<Self> {
        serde_yml::from_str(data).context("Parse analysis config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());
        let data = read_to_string(path).context(format!("Read config {}", path.display()))?;
        Self::from_yaml(&data)
    }

    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = dir.into();
        self
    }
}
