//! gs1lint CLI library
//!
//! Argument parsing, commands and output rendering for the `gs1lint` binary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use error::CliError;

use std::process::ExitCode;

/// Application exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    /// Every value passed.
    Success = 0,
    /// At least one value was rejected.
    Violation = 1,
    /// Configuration could not be loaded.
    ConfigError = 2,
    /// Reading input or writing output failed.
    IoError = 3,
    /// An internal failure unrelated to the checked data.
    Internal = 4,
    /// No linter with the requested name.
    UnknownLinter = 6,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}
