//! Environment variable handling.

use std::path::Path;

use crate::loader::ConfigError;
use crate::types::{Gs1LintConfig, OutputFormat};

/// Environment variable names.
pub mod vars {
    /// Explicit configuration file.
    pub const GS1LINT_CONFIG: &str = "GS1LINT_CONFIG";
    /// Overrides `output.format`.
    pub const GS1LINT_OUTPUT_FORMAT: &str = "GS1LINT_OUTPUT_FORMAT";
    /// Overrides `output.marker`.
    pub const GS1LINT_MARKER: &str = "GS1LINT_MARKER";
    /// Overrides `logging.level`.
    pub const GS1LINT_LOG_LEVEL: &str = "GS1LINT_LOG_LEVEL";
}

/// Load `.env.local` and `.env` from `dir` into the process environment.
///
/// Variables already set are kept, so `.env.local` wins over `.env` and the
/// real environment wins over both. Missing files are skipped.
pub fn load_dotenv(dir: impl AsRef<Path>) -> Result<(), ConfigError> {
    for name in [".env.local", ".env"] {
        match dotenvy::from_path(dir.as_ref().join(name)) {
            Ok(()) => tracing::debug!(file = name, "loaded environment file"),
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::ParseError {
                    line: None,
                    message: format!("{name}: {e}"),
                })
            }
        }
    }
    Ok(())
}

/// Overlay `GS1LINT_*` variables onto `config`.
pub fn apply_env_overrides(config: &mut Gs1LintConfig) -> Result<(), ConfigError> {
    if let Ok(format) = std::env::var(vars::GS1LINT_OUTPUT_FORMAT) {
        config.output.format =
            OutputFormat::parse(&format).ok_or_else(|| ConfigError::ValidationError {
                message: format!("{} must be text or json, got {format:?}", vars::GS1LINT_OUTPUT_FORMAT),
            })?;
    }

    if let Ok(marker) = std::env::var(vars::GS1LINT_MARKER) {
        let mut chars = marker.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => config.output.marker = c,
            _ => {
                return Err(ConfigError::ValidationError {
                    message: format!("{} must be a single character, got {marker:?}", vars::GS1LINT_MARKER),
                })
            }
        }
    }

    if let Ok(level) = std::env::var(vars::GS1LINT_LOG_LEVEL) {
        config.logging.level = level;
    }

    crate::ConfigLoader::validate(config)
}
