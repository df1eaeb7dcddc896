use std::path::{Path, PathBuf};

use common::{clock::Clock, config::AnalyzeConfig, error::AnalyzeError};
use eyre::Result;
use itertools::Itertools;
use redis_stats::ServerStats;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use ycsb::MetricRecord;

pub mod artifact;
pub mod discover;
pub mod render;

pub use artifact::{read_json, write_json};
pub use discover::{RunFiles, discover_runs};
pub use render::render_text;

/// Parsed results of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    pub name: String,
    #[serde(rename = "ycsb")]
    pub metrics: MetricRecord,
    #[serde(rename = "redis")]
    pub stats: ServerStats,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub text: String,
    pub json_path: PathBuf,
    pub results: Vec<RunResult>,
}

/// Parse the log and, when present, the stats dump of every run.
///
/// A file that cannot be read aborts the whole batch.
pub fn collect_results(runs: &[RunFiles]) -> Result<Vec<RunResult>> {
    runs.iter()
        .map(|run| {
            let metrics = ycsb::read_log(&run.log_path)?;
            let stats = match run.stats_file() {
                Some(path) => redis_stats::read_stats(path)?,
                None => {
                    debug!("No stats dump for run {}", run.name);
                    ServerStats::default()
                }
            };
            Ok(RunResult {
                name: run.name.clone(),
                metrics,
                stats,
            })
        })
        .collect()
}

/// Highest throughput first, ties keep their input order
pub fn sort_results(results: Vec<RunResult>) -> Vec<RunResult> {
    results
        .into_iter()
        .sorted_by(|a, b| b.metrics.throughput.total_cmp(&a.metrics.throughput))
        .collect()
}

fn check_results_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        return Err(AnalyzeError::MissingResultsDir(dir.to_path_buf()).into());
    }
    if !dir.is_dir() {
        return Err(AnalyzeError::NotADirectory(dir.to_path_buf()).into());
    }
    Ok(())
}

/// Run the full analysis over `config.results_dir`.
///
/// Returns `Ok(None)` without writing anything when no runs are found.
pub fn generate_report(config: &AnalyzeConfig, clock: &dyn Clock) -> Result<Option<Report>> {
    let dir = &config.results_dir;
    check_results_dir(dir)?;

    let runs = discover_runs(dir, &config.log_suffix, &config.stats_suffix)?;
    if runs.is_empty() {
        info!("No runs found in {}", dir.display());
        return Ok(None);
    }
    debug!("Discovered {} runs", runs.len());

    let results = sort_results(collect_results(&runs)?);
    let generated = clock.now();
    let text = render_text(&results, dir, generated, config.name_width);
    let json_path = write_json(&results, dir, &config.json_prefix, generated)?;

    Ok(Some(Report {
        text,
        json_path,
        results,
    }))
}
