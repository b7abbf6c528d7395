//! Logging infrastructure for the GS1 lint tools.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::Subscriber;
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging configuration.
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Minimum log level.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Log file path (if file logging enabled).
    pub file_path: Option<PathBuf>,
    /// Include source location.
    pub source_location: bool,
    /// Include span events.
    pub span_events: bool,
    /// Filter directives from `RUST_LOG` (e.g. `gs1_lint_core=trace`),
    /// used in place of `level` when set.
    pub directives: Option<String>,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl LogLevel {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Filter directive for this level.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// `steps` levels more verbose, saturating at trace.
    pub const fn louder(self, steps: u8) -> Self {
        let mut level = self;
        let mut i = 0;
        while i < steps {
            level = match level {
                Self::Error => Self::Warn,
                Self::Warn => Self::Info,
                Self::Info => Self::Debug,
                Self::Debug | Self::Trace => Self::Trace,
            };
            i += 1;
        }
        level
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable pretty format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON structured format.
    Json,
}

impl LogFormat {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Some(Self::Pretty),
            "compact" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

fn env_flag(name: &str) -> Option<bool> {
    std::env::var(name)
        .ok()
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Overlay `GS1LINT_LOG_*` variables onto this config.
    ///
    /// `RUST_LOG` is consulted only when `GS1LINT_LOG_LEVEL` is unset. A
    /// plain level sets `level`; anything else is kept as `directives`.
    pub fn apply_env(&mut self) {
        match std::env::var("GS1LINT_LOG_LEVEL") {
            Ok(level) => {
                if let Some(l) = LogLevel::parse(&level) {
                    self.level = l;
                }
                self.directives = None;
            }
            Err(_) => {
                if let Ok(rust_log) = std::env::var("RUST_LOG") {
                    match LogLevel::parse(&rust_log) {
                        Some(l) => self.level = l,
                        None if !rust_log.trim().is_empty() => self.directives = Some(rust_log),
                        None => {}
                    }
                }
            }
        }

        if let Ok(format) = std::env::var("GS1LINT_LOG_FORMAT") {
            self.format = LogFormat::parse(&format).unwrap_or_default();
        }

        if let Ok(file_path) = std::env::var("GS1LINT_LOG_FILE") {
            self.file_path = Some(PathBuf::from(file_path));
        }

        if let Some(source_location) = env_flag("GS1LINT_LOG_SOURCE") {
            self.source_location = source_location;
        }

        if let Some(span_events) = env_flag("GS1LINT_LOG_SPANS") {
            self.span_events = span_events;
        }
    }

    /// Filter directive string handed to `EnvFilter`.
    pub fn filter_directives(&self) -> String {
        match &self.directives {
            Some(directives) => directives.clone(),
            None => self.level.as_str().to_string(),
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    /// A formatting layer writing to `writer` in the configured format.
    fn layer<S, W>(&self, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let base = tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_file(self.source_location)
            .with_line_number(self.source_location)
            .with_span_events(self.span_events());

        match self.format {
            LogFormat::Pretty => base.with_ansi(ansi).with_target(true).boxed(),
            LogFormat::Compact => base.compact().with_ansi(ansi).boxed(),
            LogFormat::Json => base.json().boxed(),
        }
    }
}

/// Initialize logging with the given configuration.
///
/// Logs go to stderr, and additionally to `file_path` when set.
/// Invalid `directives` fall back to `level`.
pub fn init(config: LogConfig) -> Result<(), LogError> {
    let filter = EnvFilter::try_new(config.filter_directives())
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let file_layer = match &config.file_path {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Some(config.layer(Arc::new(file), false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(config.layer(io::stderr, true))
        .with(file_layer)
        .try_init()
        .map_err(|e| LogError::InitError(e.to_string()))
}

/// Logging errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to initialize logging: {0}")]
    InitError(String),

    #[error("failed to open log file: {0}")]
    FileError(#[from] io::Error),
}

/// Span and timing helpers.
pub mod spans;
