//! Check command: run a linter over candidate values.

use std::ffi::OsString;
use std::io::{self, BufRead};

use clap::Args;
use gs1_lint_core::{LintError, LintResult};
use gs1_lint_log::spans::batch_span;
use gs1_lint_log::timed;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::CommandContext;
use crate::error::CliError;
use crate::output::{print_output, FormattedOutput};
use crate::Exit;

/// Check values against a linter
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Linter to run (see `gs1lint list`)
    pub linter: String,

    /// Values to check; one per line on stdin when omitted
    #[arg(value_parser = clap::value_parser!(OsString))]
    pub values: Vec<OsString>,
}

impl CheckCommand {
    pub fn execute(&self, ctx: &CommandContext) -> Result<Exit, CliError> {
        // Values are raw bytes: invalid UTF-8 is for the linter to judge.
        let values: Vec<Vec<u8>> = if self.values.is_empty() {
            read_values(io::stdin().lock())?
        } else {
            self.values
                .iter()
                .map(|v| v.clone().into_encoded_bytes())
                .collect()
        };

        let span = batch_span(&self.linter, values.len());
        let _guard = span.enter();

        let results = timed!("check", ctx.registry.lint_all(&self.linter, &values))?;
        let report = CheckReport::new(&values, &results, ctx.marker, ctx.quiet);

        let failed = report.failures();
        info!(total = values.len(), failed, "check complete");

        print_output(ctx, &report)?;

        Ok(if failed == 0 {
            Exit::Success
        } else {
            Exit::Violation
        })
    }
}

/// Read one candidate per line, dropping the line terminator only.
fn read_values(reader: impl BufRead) -> Result<Vec<Vec<u8>>, CliError> {
    let mut values = Vec::new();
    for line in reader.split(b'\n') {
        let mut line = line.map_err(|e| CliError::io("failed to read values from stdin", e))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        values.push(line);
    }
    debug!(count = values.len(), "read values from stdin");
    Ok(values)
}

/// Outcome for every checked value, in input order.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct CheckReport {
    results: Vec<CheckResult>,
    #[serde(skip)]
    quiet: bool,
}

/// Outcome for a single value
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub value: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

/// A violation as reported to the user
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub kind: &'static str,
    pub code: u16,
    pub description: &'static str,
    pub offset: usize,
    pub length: usize,
    pub highlighted: String,
}

impl ErrorDetail {
    fn new(value: &[u8], error: &LintError, marker: char) -> Self {
        Self {
            kind: error.kind.name(),
            code: error.kind.code(),
            description: error.kind.description(),
            offset: error.range.offset,
            length: error.range.len,
            highlighted: error.range.highlight(value, marker),
        }
    }
}

impl CheckReport {
    pub fn new<V: AsRef<[u8]>>(
        values: &[V],
        results: &[LintResult],
        marker: char,
        quiet: bool,
    ) -> Self {
        let results = values
            .iter()
            .zip(results)
            .map(|(value, result)| CheckResult {
                value: String::from_utf8_lossy(value.as_ref()).into_owned(),
                ok: result.is_ok(),
                error: result
                    .as_ref()
                    .err()
                    .map(|e| ErrorDetail::new(value.as_ref(), e, marker)),
            })
            .collect();
        Self { results, quiet }
    }

    /// Number of rejected values.
    pub fn failures(&self) -> usize {
        self.results.iter().filter(|r| !r.ok).count()
    }

    pub fn results(&self) -> &[CheckResult] {
        &self.results
    }
}

impl FormattedOutput for CheckReport {
    fn format_text(&self) -> String {
        self.results
            .iter()
            .filter_map(|r| match &r.error {
                None if self.quiet => None,
                None => Some(format!("ok: {}", r.value)),
                Some(e) => Some(format!("error: {} - {} [{}]", e.highlighted, e.description, e.kind)),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
