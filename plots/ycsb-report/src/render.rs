use std::{fmt::Write, path::Path};

use chrono::{DateTime, Local};
use redis_stats::result::{INSTANTANEOUS_OPS_PER_SEC, USED_MEMORY_HUMAN};
use ycsb::result::{AVERAGE_LATENCY, P95_LATENCY, P99_LATENCY};

use crate::RunResult;

const WIDTH: usize = 60;

fn latency(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.2}us"),
        None => "N/A".to_owned(),
    }
}

fn truncate(name: &str, width: usize) -> String {
    name.chars().take(width).collect()
}

/// Human readable report: header, ranking table, then per-run details.
///
/// `results` is expected to be sorted already.
pub fn render_text(
    results: &[RunResult],
    results_dir: &Path,
    generated: DateTime<Local>,
    name_width: usize,
) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let column = name_width + 2;
    let mut out = String::new();

    // Writing into a String cannot fail
    _ = writeln!(out, "{heavy}");
    _ = writeln!(out, "YCSB Analysis Report");
    _ = writeln!(out, "{heavy}");
    _ = writeln!(out, "Generated: {}", generated.format("%Y-%m-%d %H:%M:%S"));
    _ = writeln!(out, "Results directory: {}", results_dir.display());
    _ = writeln!(out);

    _ = writeln!(out, "Performance ranking:");
    _ = writeln!(out, "{light}");
    _ = writeln!(out, "{:<6}{:<column$}Throughput(ops/sec)", "Rank", "Run");
    _ = writeln!(out, "{light}");
    for (rank, result) in results.iter().enumerate() {
        _ = writeln!(
            out,
            "{:<6}{:<column$}{:.2}",
            rank + 1,
            truncate(&result.name, name_width),
            result.metrics.throughput
        );
    }
    _ = writeln!(out, "{light}");

    _ = writeln!(out);
    _ = writeln!(out, "Detailed analysis:");
    _ = writeln!(out, "{heavy}");
    for result in results {
        _ = writeln!(out);
        _ = writeln!(out, "Run: {}", result.name);
        _ = writeln!(out, "{light}");
        _ = writeln!(out, "Throughput: {:.2} ops/sec", result.metrics.throughput);

        for (op, metrics) in &result.metrics.operations {
            let Some(avg) = metrics.get(AVERAGE_LATENCY) else {
                continue;
            };
            _ = writeln!(
                out,
                "  [{op}] Avg: {avg:.2}us, P95: {}, P99: {}",
                latency(metrics.get(P95_LATENCY).copied()),
                latency(metrics.get(P99_LATENCY).copied())
            );
        }

        let stats = &result.stats;
        if !stats.is_empty() {
            _ = writeln!(out, "  Server stats:");
            if let Some(memory) = stats.get(USED_MEMORY_HUMAN) {
                _ = writeln!(out, "    Memory used: {memory}");
            }
            if let Some(ops) = stats.get(INSTANTANEOUS_OPS_PER_SEC) {
                _ = writeln!(out, "    Instantaneous ops/sec: {ops}");
            }
            if let Some(rate) = stats.hit_rate() {
                _ = writeln!(out, "    Cache hit rate: {rate:.2}%");
            }
        }
    }
    out
}
