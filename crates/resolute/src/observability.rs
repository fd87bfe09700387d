//! Logging setup: human-readable events on stderr, JSONL events in a log file.
//!
//! Stdout is reserved for command output (and the MCP protocol under
//! `serve`), so nothing here writes to it.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Explicit log file path.
const LOG_PATH_ENV: &str = "RESOLUTE_LOG_PATH";

/// Log directory.
const LOG_DIR_ENV: &str = "RESOLUTE_LOG_DIR";

/// File name used when only a directory is known.
const LOG_FILE_NAME: &str = "resolute.jsonl";

/// Where JSONL logs go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Exact file to append to. Takes precedence over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for daily-rotated log files.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read `RESOLUTE_LOG_PATH` / `RESOLUTE_LOG_DIR`, letting a configured
    /// directory override the environment and falling back to the platform
    /// data directory.
    pub fn from_env_with_overrides(log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            log_dir.or_else(|| std::env::var_os(LOG_DIR_ENV).map(PathBuf::from)),
            resolute_core::config::user_data_local_dir()
                .map(|dir| dir.join("logs").into_std_path_buf()),
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        fallback_dir: Option<PathBuf>,
    ) -> Self {
        let log_path = log_path.filter(|p| !p.as_os_str().is_empty());
        let log_dir = log_dir
            .filter(|p| !p.as_os_str().is_empty())
            .or(fallback_dir);
        Self { log_path, log_dir }
    }

    /// Directory and file name of the log file, if file logging is possible.
    fn target(&self) -> Option<(PathBuf, PathBuf)> {
        if let Some(ref path) = self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let file = PathBuf::from(path.file_name()?);
            return Some((dir, file));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), PathBuf::from(LOG_FILE_NAME)))
    }
}

/// Level directive from CLI flags and the configured level.
///
/// `-q` wins over `-v`; `-v` means debug, `-vv` and beyond mean trace.
pub fn level_directive(quiet: bool, verbose: u8, configured: &str) -> &str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => configured,
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Build the event filter. `RUST_LOG` takes precedence when set.
pub fn env_filter(quiet: bool, verbose: u8, configured: &str) -> EnvFilter {
    if std::env::var_os("RUST_LOG").is_some()
        && let Ok(filter) = EnvFilter::try_from_default_env()
    {
        return filter;
    }
    EnvFilter::new(level_directive(quiet, verbose, configured))
}

/// Install the global subscriber.
///
/// Returns the file writer's guard; hold it until exit so buffered events
/// are flushed. If the log directory cannot be created, logging continues on
/// stderr only.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file = config
        .target()
        .and_then(|(dir, file)| match std::fs::create_dir_all(&dir) {
            Ok(()) => Some((dir, file)),
            Err(err) => {
                eprintln!("warning: log directory {} unavailable: {err}", dir.display());
                None
            }
        });

    let Some((dir, file)) = file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        return Ok(None);
    };

    let appender = if config.log_path.is_some() {
        tracing_appender::rolling::never(&dir, &file)
    } else {
        tracing_appender::rolling::daily(&dir, &file)
    };
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .with_current_span(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(Some(guard))
}
