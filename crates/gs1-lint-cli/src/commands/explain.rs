//! Explain command: describe a linter and the violations it reports.

use std::fmt::Write as _;

use clap::Args;
use gs1_lint_core::{LintErrorKind, LinterId};
use serde::Serialize;

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};
use crate::Exit;

/// Describe a linter
#[derive(Debug, Args)]
pub struct ExplainCommand {
    /// Linter name
    pub linter: String,
}

impl ExplainCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<Exit, CliError> {
        let id = self.linter.parse::<LinterId>().map_err(|_| {
            CliError::not_found_with_suggestions(
                "linter",
                &self.linter,
                ctx.registry.find_similar(&self.linter),
            )
        })?;

        let mut explanation = LinterExplanation::from(id);
        explanation.enabled = ctx.registry.contains(id.name());
        print_output(ctx, &explanation)?;
        Ok(Exit::Success)
    }
}

#[derive(Debug, Serialize)]
pub struct LinterExplanation {
    pub name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
    pub errors: Vec<KindSummary>,
}

#[derive(Debug, Serialize)]
pub struct KindSummary {
    pub name: &'static str,
    pub code: u16,
    pub description: &'static str,
}

impl From<LintErrorKind> for KindSummary {
    fn from(kind: LintErrorKind) -> Self {
        Self {
            name: kind.name(),
            code: kind.code(),
            description: kind.description(),
        }
    }
}

impl From<LinterId> for LinterExplanation {
    fn from(id: LinterId) -> Self {
        Self {
            name: id.name(),
            description: id.description(),
            enabled: true,
            errors: id.kinds().iter().copied().map(KindSummary::from).collect(),
        }
    }
}

impl FormattedOutput for LinterExplanation {
    fn format_text(&self) -> String {
        let mut out = format!("{} - {}", self.name, self.description);
        if !self.enabled {
            out.push_str(" (disabled)");
        }
        out.push_str("\n\nerrors:");
        for kind in &self.errors {
            let _ = write!(out, "\n  {:>3}  {}: {}", kind.code, kind.name, kind.description);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso5218_explanation() {
        let explanation = LinterExplanation::from(LinterId::Iso5218);
        assert_eq!(explanation.errors.len(), 1);
        assert_eq!(explanation.errors[0].name, "invalid_biological_sex_code");

        let text = explanation.format_text();
        assert!(text.starts_with("iso5218 - "));
        assert!(text.contains("invalid_biological_sex_code"));
        assert!(!text.contains("(disabled)"));
    }

    #[test]
    fn test_every_linter_has_errors() {
        for id in LinterId::all() {
            assert!(!LinterExplanation::from(*id).errors.is_empty(), "{id:?}");
        }
    }
}
