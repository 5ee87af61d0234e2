use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// Output goes to a file because the terminal is owned by the UI.
/// `RUST_LOG` overrides `level` when set.
pub fn init_tracing(config: &LoggingConfig, level: Option<&str>) -> anyhow::Result<()> {
    let path = config.file_path();
    let file = open_log_file(&path)?;

    let directive = level.unwrap_or(config.level.as_str());
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directive))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

fn open_log_file(path: &Path) -> anyhow::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
