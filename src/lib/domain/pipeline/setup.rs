use anyhow::Context;
use chrono::{DateTime, Utc};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    Registry, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_DIR: &str = "log";

/// `<dir>/lead_sheet_<UTC timestamp>.log`
pub fn log_file_path(dir: &Path, started_at: DateTime<Utc>) -> PathBuf {
    dir.join(format!(
        "lead_sheet_{}.log",
        started_at.format("%Y-%m-%d_%H-%M-%S")
    ))
}

/// Installs stdout and plain-text file output, both filtered at `log_level`.
pub fn setup_logging(log_level: tracing::Level) -> anyhow::Result<()> {
    let log_dir = Path::new(LOG_DIR);
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", LOG_DIR))?;
    let log_file_path = log_file_path(log_dir, Utc::now());
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_file_path)
        .with_context(|| format!("Failed to open log file: {}", log_file_path.display()))?;
    Registry::default()
        .with(LevelFilter::from_level(log_level))
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(std::sync::Mutex::new(log_file))
                .with_ansi(false),
        )
        .with(tracing_subscriber::fmt::Layer::default().with_writer(std::io::stdout))
        .init();
    info!(
        "Logging at level {} to {}",
        log_level,
        log_file_path.display()
    );
    Ok(())
}
