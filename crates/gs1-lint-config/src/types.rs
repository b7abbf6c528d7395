//! Configuration types.

use std::fmt;

use gs1_lint_log::{LogConfig, LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gs1LintConfig {
    /// How results are rendered.
    pub output: OutputConfig,
    /// Diagnostic logging.
    pub logging: LoggingConfig,
    /// Which linters are available.
    pub linters: LintersConfig,
}

impl Gs1LintConfig {
    /// Logging setup derived from the `logging` section.
    ///
    /// Values that do not parse fall back to the logging defaults;
    /// [`ConfigLoader::validate`](crate::ConfigLoader::validate) rejects them earlier.
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: LogLevel::parse(&self.logging.level).unwrap_or_default(),
            format: LogFormat::parse(&self.logging.format).unwrap_or_default(),
            ..LogConfig::default()
        }
    }

    /// Level of the per-value lint events, from `logging.lint_events`.
    pub fn lint_event_level(&self) -> LogLevel {
        LogLevel::parse(&self.logging.lint_events).unwrap_or(LogLevel::Debug)
    }

    /// Whether the linter `name` has been disabled.
    pub fn is_disabled(&self, name: &str) -> bool {
        self.linters.disabled.iter().any(|d| d == name)
    }
}

/// Result rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Text or JSON.
    pub format: OutputFormat,
    /// Character placed either side of an error range.
    pub marker: char,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            marker: '*',
        }
    }
}

/// Whether `c` may mark an error range: a printable ASCII symbol, so it
/// cannot be confused with value content.
pub fn is_valid_marker(c: char) -> bool {
    c.is_ascii_graphic() && !c.is_ascii_alphanumeric()
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per value.
    #[default]
    Text,
    /// A JSON array of results.
    Json,
}

impl OutputFormat {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => f.write_str("text"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Minimum level: trace, debug, info, warn or error.
    pub level: String,
    /// pretty, compact or json.
    pub format: String,
    /// Level at which every lint outcome is logged.
    pub lint_events: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "pretty".to_string(),
            lint_events: "debug".to_string(),
        }
    }
}

/// Linter selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintersConfig {
    /// Names of linters that may not be used.
    pub disabled: Vec<String>,
}
