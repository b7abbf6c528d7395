//! Configuration file loading and parsing.

use std::path::{Path, PathBuf};

use gs1_lint_core::LinterId;
use gs1_lint_log::spans::{config_span, record_error};
use gs1_lint_log::{LogFormat, LogLevel};
use regex::Regex;
use thiserror::Error;

use crate::types::{is_valid_marker, Gs1LintConfig};

/// Name of the configuration file looked up in a project directory.
pub const CONFIG_FILE: &str = "gs1lint.yaml";

/// Config loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read config: {source}")]
    ReadError {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid YAML at line {}: {message}", line.map(|l| l.to_string()).unwrap_or_else(|| "unknown".to_string()))]
    ParseError { line: Option<usize>, message: String },

    #[error("validation error: {message}")]
    ValidationError { message: String },

    #[error("environment variable not found: {var}")]
    EnvVarNotFound { var: String },
}

impl ConfigError {
    fn invalid(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }
}

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: PathBuf,
    required: bool,
}

impl ConfigLoader {
    /// Create a loader for `gs1lint.yaml` in the given project directory.
    ///
    /// A missing file yields the defaults.
    pub fn new(project_dir: impl AsRef<Path>) -> Self {
        Self {
            config_path: project_dir.as_ref().join(CONFIG_FILE),
            required: false,
        }
    }

    /// Create a loader for an explicit file, which must exist.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            config_path: path.as_ref().to_path_buf(),
            required: true,
        }
    }

    /// Path of the file this loader reads.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Load, expand and validate the configuration.
    pub fn load(&self) -> Result<Gs1LintConfig, ConfigError> {
        let span = config_span(&self.config_path.display().to_string());
        let _guard = span.enter();

        self.load_inner().map_err(|e| {
            record_error(&e);
            e
        })
    }

    fn load_inner(&self) -> Result<Gs1LintConfig, ConfigError> {
        if !self.config_path.exists() {
            if self.required {
                return Err(ConfigError::NotFound {
                    path: self.config_path.clone(),
                });
            }
            tracing::debug!(path = %self.config_path.display(), "no config file, using defaults");
            return Ok(Gs1LintConfig::default());
        }

        let contents = std::fs::read_to_string(&self.config_path)?;
        let config = Self::parse(&contents)?;
        tracing::debug!(path = %self.config_path.display(), "loaded config");
        Ok(config)
    }

    /// Parse, expand and validate configuration text.
    pub fn parse(contents: &str) -> Result<Gs1LintConfig, ConfigError> {
        let expanded = expand_env_vars(contents)?;

        // An empty document deserializes as unit, not as a map.
        if expanded.trim().is_empty() {
            return Ok(Gs1LintConfig::default());
        }

        let config: Gs1LintConfig =
            serde_yaml::from_str(&expanded).map_err(|e| ConfigError::ParseError {
                line: e.location().map(|l| l.line()),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration values.
    pub fn validate(config: &Gs1LintConfig) -> Result<(), ConfigError> {
        let marker = config.output.marker;
        if !is_valid_marker(marker) {
            return Err(ConfigError::invalid(format!(
                "output.marker must be a printable ASCII symbol, got {marker:?}"
            )));
        }

        if LogLevel::parse(&config.logging.level).is_none() {
            return Err(ConfigError::invalid(format!(
                "logging.level must be one of trace, debug, info, warn, error; got {:?}",
                config.logging.level
            )));
        }

        if LogLevel::parse(&config.logging.lint_events).is_none() {
            return Err(ConfigError::invalid(format!(
                "logging.lint_events must be one of trace, debug, info, warn, error; got {:?}",
                config.logging.lint_events
            )));
        }

        if LogFormat::parse(&config.logging.format).is_none() {
            return Err(ConfigError::invalid(format!(
                "logging.format must be one of pretty, compact, json; got {:?}",
                config.logging.format
            )));
        }

        if let Some(unknown) = config
            .linters
            .disabled
            .iter()
            .find(|name| name.parse::<LinterId>().is_err())
        {
            return Err(ConfigError::invalid(format!(
                "linters.disabled names an unknown linter: {unknown}"
            )));
        }

        Ok(())
    }

    /// Save configuration to the loader's path.
    pub fn save(&self, config: &Gs1LintConfig) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(config).map_err(|e| ConfigError::ParseError {
            line: None,
            message: e.to_string(),
        })?;

        std::fs::write(&self.config_path, yaml)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(std::env::current_dir().unwrap_or_default())
    }
}

/// Expand environment variables in the form `${VAR}` or `${VAR:-default}`.
pub fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
    let re = Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").map_err(|e| ConfigError::ParseError {
        line: None,
        message: e.to_string(),
    })?;

    let mut result = String::with_capacity(content.len());
    let mut last = 0;

    for cap in re.captures_iter(content) {
        let Some(full) = cap.get(0) else { continue };
        let var_name = &cap[1];

        let value = match std::env::var(var_name) {
            Ok(v) => v,
            Err(_) => match cap.get(2) {
                Some(default) => default.as_str().to_string(),
                None => {
                    return Err(ConfigError::EnvVarNotFound {
                        var: var_name.to_string(),
                    })
                }
            },
        };

        result.push_str(&content[last..full.start()]);
        result.push_str(&value);
        last = full.end();
    }

    result.push_str(&content[last..]);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OutputFormat;
    use crate::ENV_LOCK;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_defaults_when_no_file() {
        let dir = tempdir().unwrap();
        let config = ConfigLoader::new(dir.path()).load().unwrap();
        assert_eq!(config, Gs1LintConfig::default());
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("other.yaml");
        match ConfigLoader::from_file(&path).load().unwrap_err() {
            ConfigError::NotFound { path: missing } => assert_eq!(missing, path),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_from_yaml_file() {
        let dir = tempdir().unwrap();
        let config_content = r#"
output:
  format: json
  marker: '|'
logging:
  level: debug
linters:
  disabled:
    - iban
    - couponposoffer
"#;
        fs::write(dir.path().join(CONFIG_FILE), config_content).unwrap();

        let config = ConfigLoader::new(dir.path()).load().unwrap();

        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.marker, '|');
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.is_disabled("couponposoffer"));
    }

    #[test]
    fn test_empty_file_is_default() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "\n# nothing here\n").unwrap();
        assert_eq!(ConfigLoader::new(dir.path()).load().unwrap(), Gs1LintConfig::default());
    }

    #[test]
    fn test_env_var_expansion() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::set_var("GS1LINT_TEST_LEVEL", "info");
        let result = expand_env_vars("level: ${GS1LINT_TEST_LEVEL} # ${GS1LINT_TEST_LEVEL}").unwrap();
        assert_eq!(result, "level: info # info");
        std::env::remove_var("GS1LINT_TEST_LEVEL");
    }

    #[test]
    fn test_env_var_default() {
        let result = expand_env_vars("format: ${GS1LINT_TEST_NONEXISTENT:-json}").unwrap();
        assert_eq!(result, "format: json");
    }

    #[test]
    fn test_env_var_missing_error() {
        match expand_env_vars("format: ${GS1LINT_TEST_MISSING}").unwrap_err() {
            ConfigError::EnvVarNotFound { var } => assert_eq!(var, "GS1LINT_TEST_MISSING"),
            other => panic!("expected EnvVarNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_errors() {
        let mut config = Gs1LintConfig::default();
        config.output.marker = 'x';
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::ValidationError { message }) if message.contains("output.marker")
        ));

        let mut config = Gs1LintConfig::default();
        config.logging.lint_events = "chatty".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::ValidationError { message }) if message.contains("logging.lint_events")
        ));

        let mut config = Gs1LintConfig::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::ValidationError { message }) if message.contains("logging.level")
        ));

        let mut config = Gs1LintConfig::default();
        config.logging.format = "xml".to_string();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::ValidationError { message }) if message.contains("logging.format")
        ));

        let mut config = Gs1LintConfig::default();
        config.linters.disabled.push("iso9999".to_string());
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::ValidationError { message }) if message.contains("iso9999")
        ));
    }

    #[test]
    fn test_parse_error_with_line_number() {
        let bad_yaml = "output:\n  format: text\n  marker: [unclosed\n";
        match ConfigLoader::parse(bad_yaml).unwrap_err() {
            ConfigError::ParseError { line, .. } => assert!(line.is_some()),
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_format_is_parse_error() {
        assert!(matches!(
            ConfigLoader::parse("output:\n  format: xml\n"),
            Err(ConfigError::ParseError { .. })
        ));
    }

    #[test]
    fn test_save_config() {
        let dir = tempdir().unwrap();
        let loader = ConfigLoader::from_file(dir.path().join("nested").join(CONFIG_FILE));

        let mut config = Gs1LintConfig::default();
        config.output.marker = '^';
        config.linters.disabled.push("hh".to_string());
        loader.save(&config).unwrap();

        assert_eq!(loader.load().unwrap(), config);
    }
}
