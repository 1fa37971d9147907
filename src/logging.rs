use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::ChronoLocal;

/// Minimum level when `RUST_LOG` is not set: `--no-verbose` raises it to `warn`.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "info" } else { "warn" }
}

/// Sends all logs of the process to `log_file`, appending to it.
///
/// The level is `info`, or `warn` when `verbose` is false; `RUST_LOG`
/// overrides both. Keep the returned guard alive until the process exits,
/// otherwise buffered lines are lost.
pub fn init_logging(log_file: &Path, verbose: bool) -> Result<WorkerGuard> {
    let dir = log_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = log_file
        .file_name()
        .with_context(|| format!("log path {} has no file name", log_file.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install the log subscriber: {e}"))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn verbose_logs_info() {
        assert_eq!(default_filter(true), "info");
        assert_eq!(EnvFilter::new(default_filter(true)).max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn no_verbose_raises_level_to_warn() {
        assert_eq!(default_filter(false), "warn");
        assert_eq!(EnvFilter::new(default_filter(false)).max_level_hint(), Some(LevelFilter::WARN));
    }
}
