//! CLI error handling and formatting.

use std::fmt::Write as _;
use std::io;
use std::process::ExitCode;

use gs1_lint_config::ConfigError;
use gs1_lint_core::RegistryError;
use gs1_lint_log::LogError;
use thiserror::Error;

use crate::Exit;

/// CLI error type with rich context
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
        hint: Option<String>,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: io::Error,
    },

    #[error("{message}")]
    NotFound {
        message: String,
        resource_type: String,
        resource_name: String,
        suggestions: Vec<String>,
    },

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Get the error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config { .. } => "E001",
            Self::Io { .. } => "E002",
            Self::NotFound { .. } => "E005",
            Self::Other(_) => "E999",
        }
    }

    /// Get the process exit status for this error
    pub fn exit(&self) -> Exit {
        match self {
            Self::Config { .. } => Exit::ConfigError,
            Self::Io { .. } => Exit::IoError,
            Self::NotFound { .. } => Exit::UnknownLinter,
            Self::Other(_) => Exit::Internal,
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        self.exit().into()
    }

    /// Get hint for this error if available
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Config { hint, .. } => hint.as_deref(),
            Self::NotFound { suggestions, .. } if !suggestions.is_empty() => {
                Some("did you mean one of the suggestions below?")
            }
            Self::NotFound { .. } => Some("run `gs1lint list` to see available linters"),
            _ => None,
        }
    }

    /// Get suggestions for this error
    pub fn suggestions(&self) -> &[String] {
        match self {
            Self::NotFound { suggestions, .. } => suggestions,
            _ => &[],
        }
    }

    /// Render for stderr: `error[CODE]: message`, then hint and suggestions.
    ///
    /// With `verbose`, the chain of underlying causes is included.
    pub fn render(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "error[{}]: {self}", self.code());

        if verbose {
            let mut source = std::error::Error::source(self);
            while let Some(cause) = source {
                let _ = writeln!(out, "  caused by: {cause}");
                source = cause.source();
            }
        }

        if let Some(hint) = self.hint() {
            let _ = writeln!(out, "hint: {hint}");
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = writeln!(out, "suggestions:");
            for s in suggestions {
                let _ = writeln!(out, "  - {s}");
            }
        }
        out
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
            hint: None,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a not found error with suggestions
    pub fn not_found_with_suggestions(
        resource_type: impl Into<String>,
        resource_name: impl Into<String>,
        suggestions: Vec<String>,
    ) -> Self {
        let resource_type = resource_type.into();
        let resource_name = resource_name.into();
        Self::NotFound {
            message: format!("{resource_type} not found: {resource_name}"),
            resource_type,
            resource_name,
            suggestions,
        }
    }
}

// Conversion implementations
impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(anyhow::Error::new(err).context("JSON serialization failed"))
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        let hint = match &err {
            ConfigError::NotFound { .. } => "Check the --config path or GS1LINT_CONFIG",
            ConfigError::EnvVarNotFound { .. } => "Set the variable or give a default with ${VAR:-default}",
            _ => "Check your gs1lint.yaml configuration file",
        };
        Self::Config {
            message: format!("Configuration error: {err}"),
            source: Some(Box::new(err)),
            hint: Some(hint.to_string()),
        }
    }
}

impl From<RegistryError> for CliError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::UnknownLinter { name, suggestions } => {
                Self::not_found_with_suggestions("linter", name, suggestions)
            }
        }
    }
}

impl From<LogError> for CliError {
    fn from(err: LogError) -> Self {
        match err {
            LogError::FileError(source) => Self::io("failed to open log file", source),
            LogError::InitError(message) => Self::Other(anyhow::anyhow!("failed to initialize logging: {message}")),
        }
    }
}
