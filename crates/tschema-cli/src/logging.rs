//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `error`: fatal errors
//! - `warn`: schema fields missing from the data header
//! - `info`: run summary counts
//! - `debug`: per-pass progress
//! - `trace`: row-level failures, including cell values
//!
//! # Usage
//!
//! ```ignore
//! use tschema_cli::logging::{init_logging, LogConfig, LogFormat};
//!
//! let config = LogConfig {
//!     format: LogFormat::Compact,
//!     ..LogConfig::default()
//! };
//! init_logging(&config)?;
//! ```

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
};

/// Crates whose events follow the configured level; everything else stays at warn.
const WORKSPACE_TARGETS: &[&str] = &[
    "tschema",
    "tschema_cli",
    "tschema_ingest",
    "tschema_model",
    "tschema_validate",
];

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Maximum level emitted by workspace crates.
    pub level_filter: LevelFilter,
    /// Let `RUST_LOG` override `level_filter` when set.
    pub use_env_filter: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file path. When set, logs are written to the file.
    pub log_file: Option<PathBuf>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format with colors.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON format for machine parsing.
    Json,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::WARN,
            use_env_filter: true,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
        }
    }
}

type BoxedSubscriber = Box<dyn Subscriber + Send + Sync + 'static>;

/// Install the global tracing subscriber for the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a global subscriber
/// is already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let subscriber = if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        build_subscriber(config, SharedWriter::new(file))
    } else {
        build_subscriber(config, io::stderr)
    };
    tracing::subscriber::set_global_default(subscriber).map_err(io::Error::other)
}

/// Subscriber writing events for `config` to `writer`. Timestamps are omitted.
fn build_subscriber<W>(config: &LogConfig, writer: W) -> BoxedSubscriber
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let filter = build_env_filter(config);
    let registry = tracing_subscriber::registry().with(filter);

    match config.format {
        LogFormat::Json => Box::new(
            registry.with(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_target(false)
                    .without_time(),
            ),
        ),
        LogFormat::Compact => Box::new(
            registry.with(
                fmt::layer()
                    .compact()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(false)
                    .without_time(),
            ),
        ),
        LogFormat::Pretty => Box::new(
            registry.with(
                fmt::layer()
                    .with_writer(writer)
                    .with_ansi(config.with_ansi)
                    .with_target(false)
                    .without_time(),
            ),
        ),
    }
}

/// Clonable handle that serializes writes to one underlying writer.
struct SharedWriter<W> {
    inner: Arc<Mutex<W>>,
}

impl<W> SharedWriter<W> {
    fn new(writer: W) -> Self {
        Self {
            inner: Arc::new(Mutex::new(writer)),
        }
    }
}

impl<W> Clone for SharedWriter<W> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<W: Write> Write for SharedWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("log writer lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| io::Error::other("log writer lock poisoned"))?;
        guard.flush()
    }
}

impl<'a, W: Write + 'a> MakeWriter<'a> for SharedWriter<W> {
    type Writer = SharedWriter<W>;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Directive string enabling `level` for the workspace crates only.
fn default_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    let mut directives = vec!["warn".to_string()];
    directives.extend(
        WORKSPACE_TARGETS
            .iter()
            .map(|target| format!("{target}={level}")),
    );
    directives.join(",")
}

/// Build an `EnvFilter`, letting `RUST_LOG` win when allowed.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(config.level_filter));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(config: &LogConfig, emit: impl FnOnce()) -> String {
        let buffer = SharedWriter::new(Vec::<u8>::new());
        let subscriber = build_subscriber(config, buffer.clone());
        tracing::subscriber::with_default(subscriber, emit);
        let bytes = buffer.inner.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn config(level_filter: LevelFilter, format: LogFormat) -> LogConfig {
        LogConfig {
            level_filter,
            use_env_filter: false,
            with_ansi: false,
            format,
            log_file: None,
        }
    }

    #[test]
    fn directives_cover_workspace_crates() {
        let directives = default_directives(LevelFilter::DEBUG);
        assert!(directives.starts_with("warn,"));
        assert!(directives.contains("tschema_validate=debug"));
        assert!(directives.contains("tschema_ingest=debug"));
    }

    #[test]
    fn off_level_is_lowercase() {
        assert!(default_directives(LevelFilter::OFF).contains("tschema_cli=off"));
    }

    #[test]
    fn workspace_events_follow_configured_level() {
        let output = captured(&config(LevelFilter::INFO, LogFormat::Compact), || {
            tracing::info!(target: "tschema_validate", rows = 3, "validation complete");
            tracing::debug!(target: "tschema_validate", "row pass complete");
        });
        assert!(output.contains("validation complete"));
        assert!(output.contains("rows=3"));
        assert!(!output.contains("row pass complete"));
    }

    #[test]
    fn other_crates_stay_at_warn() {
        let output = captured(&config(LevelFilter::TRACE, LogFormat::Pretty), || {
            tracing::info!(target: "csv", "noisy dependency");
            tracing::warn!(target: "csv", "dependency warning");
        });
        assert!(!output.contains("noisy dependency"));
        assert!(output.contains("dependency warning"));
    }

    #[test]
    fn json_format_writes_one_object_per_event() {
        let output = captured(&config(LevelFilter::WARN, LogFormat::Json), || {
            tracing::warn!(target: "tschema_validate", field = "id", "field not present in header");
        });
        let line = output.lines().next().unwrap();
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["level"], "WARN");
        assert_eq!(event["fields"]["field"], "id");
        assert_eq!(event["fields"]["message"], "field not present in header");
    }
}
