//! Output formatting utilities for CLI commands.

use serde::Serialize;
use std::io::Write;

use crate::cli::{CommandContext, OutputFormat};
use crate::error::CliError;

/// Trait for types that can be formatted for output
pub trait FormattedOutput {
    fn format_text(&self) -> String;

    fn format_json(&self) -> Result<String, serde_json::Error>
    where
        Self: Serialize + Sized,
    {
        serde_json::to_string_pretty(self)
    }
}

fn render<T>(ctx: &CommandContext, value: &T) -> Result<String, CliError>
where
    T: FormattedOutput + Serialize,
{
    Ok(match ctx.format {
        OutputFormat::Text => value.format_text(),
        OutputFormat::Json => value.format_json()?,
    })
}

/// Print formatted output to stdout
pub fn print_output<T>(ctx: &CommandContext, value: &T) -> Result<(), CliError>
where
    T: FormattedOutput + Serialize,
{
    let stdout = std::io::stdout();
    write_output(ctx, value, stdout.lock())
}

/// Print formatted output to a writer. Empty text output writes nothing.
pub fn write_output<T, W>(ctx: &CommandContext, value: &T, mut writer: W) -> Result<(), CliError>
where
    T: FormattedOutput + Serialize,
    W: Write,
{
    let output = render(ctx, value)?;
    if output.is_empty() {
        return Ok(());
    }
    writeln!(writer, "{output}").map_err(|e| CliError::io("failed to write output", e))?;
    Ok(())
}
