use std::process::ExitCode;

use anyhow::Context;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{AppConfig, LoggingConfig};
use crate::generator;

/// Daily-rotating log file under `cfg.dir`; creates the directory and reports why it could not.
pub fn file_appender(cfg: &LoggingConfig) -> anyhow::Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(cfg.file_prefix.as_str())
        .build(&cfg.dir)
        .with_context(|| format!("cannot open log directory {}", cfg.dir.display()))
}

/// Installs the global subscriber (stdout + rolling file). Keep the guards alive
/// until exit so the non-blocking writers flush.
pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<(WorkerGuard, WorkerGuard)> {
    let file_appender = file_appender(cfg)?;
    let (stdout_nb, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let (file_nb, file_guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cfg.filter.as_str().into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(stdout_nb))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_nb))
        .try_init()?;
    Ok((stdout_guard, file_guard))
}

/// One generator run with a loaded configuration, mapped to the process exit code.
///
/// Unreadable or undecodable sources (and descriptor write errors) fail the run;
/// per-size save failures still succeed and show up in the `<successes>/<total>` summary.
pub fn run(cfg: &AppConfig) -> ExitCode {
    info!("Android icon generator");
    info!("Source: {}", cfg.paths.source.display());
    info!("Output: {}", cfg.paths.output_root.display());

    match generator::generate(&cfg.paths.source, &cfg.paths.output_root) {
        Ok(report) => {
            info!("Icon generation finished: {} sizes", report.summary_line());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Icon generation failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
