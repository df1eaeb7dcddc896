use std::path::{Path, PathBuf};

use clap::Parser;
use common::{clock::SystemClock, config::AnalyzeConfig};
use eyre::{ContextCompat, Result};
use tracing::{debug, error};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{layer, time::ChronoLocal},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const MODULES: &[&str] = &["common", "ycsb", "redis_stats", "ycsb_report"];

/// Rank YCSB runs by throughput and summarise their latency and server stats
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// Directory holding `<run>_run.log` and `<run>_redis_stats.txt` files
    results_dir: Option<PathBuf>,
    /// YAML file overriding the analysis settings
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Extra tracing directives, e.g. `ycsb=debug`
    #[arg(short, long)]
    log: Vec<String>,
    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(args: &Cli) -> Result<Option<WorkerGuard>> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let mut env_filter = EnvFilter::new(format!("ycsb_analyze={log_level}"));

    for log in &args.log {
        env_filter = env_filter.add_directive(log.parse()?);
    }

    for module in MODULES {
        if !args.log.iter().any(|x| x.starts_with(module)) {
            env_filter = env_filter.add_directive(format!("{module}={log_level}").parse()?);
        }
    }

    let (file_layer, guard) = match &args.log_file {
        Some(path) => {
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let file_name = path.file_name().context("Log file path has no file name")?;
            let (non_blocking, guard) =
                tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
            (
                Some(layer().with_ansi(false).with_writer(non_blocking)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            layer()
                .with_timer(ChronoLocal::new("%v %k:%M:%S %z".to_owned()))
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let _guard = init_logging(&args)?;

    let mut config = match &args.config {
        Some(path) => AnalyzeConfig::load(path)?,
        None => AnalyzeConfig::default(),
    };
    if let Some(dir) = args.results_dir {
        config = config.with_results_dir(dir);
    }
    debug!("Analysis settings: {config:?}");

    match ycsb_report::generate_report(&config, &SystemClock) {
        Ok(Some(report)) => {
            print!("{}", report.text);
            println!();
            println!("JSON report saved: {}", report.json_path.display());
        }
        Ok(None) => println!("No result files found in {}", config.results_dir.display()),
        Err(err) => {
            error!("{err:#}");
            return Err(err);
        }
    }

    Ok(())
}
