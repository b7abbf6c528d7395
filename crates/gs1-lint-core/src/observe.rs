//! Observation of lint outcomes.
//!
//! The registry reports every outcome to a [`LintObserver`]. The default
//! [`NoopObserver`] does nothing; [`TracingObserver`] forwards outcomes to
//! `tracing` at a level chosen at runtime. Observers see outcomes, they
//! never change them.

use tracing::Level;

use crate::result::LintResult;

/// Receives the outcome of every linter run by a registry.
pub trait LintObserver: Send + Sync {
    /// Called once per run, after the linter returns.
    fn observe(&self, linter: &str, data: &[u8], result: &LintResult);
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl LintObserver for NoopObserver {
    fn observe(&self, _linter: &str, _data: &[u8], _result: &LintResult) {}
}

/// Observer that emits a `tracing` event per outcome.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    level: Level,
}

impl TracingObserver {
    /// Emit events at `level`.
    pub const fn new(level: Level) -> Self {
        Self { level }
    }

    /// The level events are emitted at.
    pub const fn level(&self) -> Level {
        self.level
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new(Level::DEBUG)
    }
}

macro_rules! lint_event {
    ($level:expr, $linter:expr, $data:expr, $result:expr) => {
        match $result {
            Ok(()) => tracing::event!(
                $level,
                linter = $linter,
                len = $data.len(),
                outcome = "ok",
                "lint passed"
            ),
            Err(e) => tracing::event!(
                $level,
                linter = $linter,
                len = $data.len(),
                outcome = e.kind.name(),
                offset = e.range.offset,
                err_len = e.range.len,
                "lint failed"
            ),
        }
    };
}

impl LintObserver for TracingObserver {
    fn observe(&self, linter: &str, data: &[u8], result: &LintResult) {
        // `event!` needs a constant level.
        match self.level {
            Level::TRACE => lint_event!(Level::TRACE, linter, data, result),
            Level::DEBUG => lint_event!(Level::DEBUG, linter, data, result),
            Level::INFO => lint_event!(Level::INFO, linter, data, result),
            Level::WARN => lint_event!(Level::WARN, linter, data, result),
            _ => lint_event!(Level::ERROR, linter, data, result),
        }
    }
}
