pub mod clock;
pub mod config;
pub mod error;
pub mod pattern;

pub const DEFAULT_RESULTS_DIR: &str = "results";
pub const LOG_SUFFIX: &str = "_run.log";
pub const STATS_SUFFIX: &str = "_redis_stats.txt";
