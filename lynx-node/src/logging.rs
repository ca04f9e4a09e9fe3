use std::fs::File;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    util::SubscriberInitExt,
    FmtSubscriber,
};

/// Installs the global subscriber. Records from the `log` facade used by
/// the library crates are forwarded to it. `RUST_LOG` directives take
/// precedence over `log_level`.
///
/// The returned guard flushes the log file and must outlive the node.
pub fn init(log_level: &str, log_file: Option<&str>) -> Result<Option<WorkerGuard>> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    let subscriber_builder =
        FmtSubscriber::builder().with_env_filter(build_filter(log_level, &directives));

    let guard = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path))?;
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file);
            subscriber_builder
                .with_ansi(false)
                .with_writer(non_blocking_writer)
                .finish()
                .try_init()
                .context("setting default subscriber failed")?;
            Some(guard)
        }
        None => {
            subscriber_builder
                .finish()
                .try_init()
                .context("setting default subscriber failed")?;
            None
        }
    };
    Ok(guard)
}

fn build_filter(log_level: &str, directives: &str) -> EnvFilter {
    let level = log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(directives)
}
