//! Lint results and composition helpers.

use crate::error::{LintError, LintErrorKind};
use crate::range::ErrorRange;

/// Outcome of a single linter call.
pub type LintResult = Result<(), LintError>;

/// Return a [`LintError`] from the enclosing linter.
///
/// ```ignore
/// if data.len() != 2 {
///     return fail(LintErrorKind::HourTooShort, ErrorRange::whole(data));
/// }
/// ```
pub const fn fail(kind: LintErrorKind, range: ErrorRange) -> LintResult {
    Err(LintError::new(kind, range))
}

/// Extension trait for composing linters out of other linters.
pub trait LintResultExt {
    /// Re-base the error range of a linter run on `data[by..]`.
    fn shifted(self, by: usize) -> LintResult;

    /// Replace the error kind, keeping the range.
    fn with_kind(self, kind: LintErrorKind) -> LintResult;
}

impl LintResultExt for LintResult {
    fn shifted(self, by: usize) -> LintResult {
        self.map_err(|e| LintError::new(e.kind, e.range.shifted(by)))
    }

    fn with_kind(self, kind: LintErrorKind) -> LintResult {
        self.map_err(|e| LintError::new(kind, e.range))
    }
}

/// Return early with a lint error if a condition is not satisfied.
#[macro_export]
macro_rules! ensure_lint {
    ($cond:expr, $kind:expr, $range:expr $(,)?) => {
        if !$cond {
            return $crate::result::fail($kind, $range);
        }
    };
}
