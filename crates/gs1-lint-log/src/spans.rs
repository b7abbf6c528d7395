//! Span and timing helpers.

use std::time::Instant;

use tracing::{info_span, Span};

/// Create a span for linting a batch of values.
pub fn batch_span(linter: &str, count: usize) -> Span {
    info_span!("batch", linter = %linter, count)
}

/// Create a span for loading configuration from `path`.
///
/// The `error` field is filled in by [`record_error`] when loading fails.
pub fn config_span(path: &str) -> Span {
    info_span!("config", path = %path, error = tracing::field::Empty)
}

/// Record an error on the current span.
pub fn record_error(error: &dyn std::error::Error) {
    Span::current().record("error", tracing::field::display(error));
}

/// Timing utility for operations.
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start a new timer.
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }

    /// Complete the timer and record duration.
    pub fn finish(self) {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.operation,
            duration_us = duration.as_micros() as u64,
            "operation completed"
        );
    }
}

/// Time a block of code, logging its duration at debug level.
#[macro_export]
macro_rules! timed {
    ($name:expr, $body:expr) => {{
        let _timer = $crate::spans::Timer::start($name);
        let result = $body;
        _timer.finish();
        result
    }};
}
