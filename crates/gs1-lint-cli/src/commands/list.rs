//! List command.

use clap::Args;
use serde::Serialize;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};
use crate::Exit;

/// List available linters
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only print linter names
    #[arg(long)]
    pub names_only: bool,
}

impl ListCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<Exit, CliError> {
        let output = ListOutput::from_context(ctx, self.names_only);
        print_output(ctx, &output)?;
        Ok(Exit::Success)
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ListOutput {
    linters: Vec<LinterSummary>,
    #[serde(skip)]
    names_only: bool,
}

#[derive(Debug, Serialize)]
pub struct LinterSummary {
    pub name: String,
    pub description: String,
}

impl ListOutput {
    pub fn from_context(ctx: &CommandContext, names_only: bool) -> Self {
        let linters = ctx
            .registry
            .names()
            .into_iter()
            .filter_map(|name| ctx.registry.get(name))
            .map(|linter| LinterSummary {
                name: linter.name().to_string(),
                description: linter.description().to_string(),
            })
            .collect();
        Self { linters, names_only }
    }

    pub fn linters(&self) -> &[LinterSummary] {
        &self.linters
    }
}

impl FormattedOutput for ListOutput {
    fn format_text(&self) -> String {
        if self.names_only {
            return self
                .linters
                .iter()
                .map(|l| l.name.as_str())
                .collect::<Vec<_>>()
                .join("\n");
        }

        let width = self.linters.iter().map(|l| l.name.len()).max().unwrap_or(0);
        self.linters
            .iter()
            .map(|l| format!("{:width$}  {}", l.name, l.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
