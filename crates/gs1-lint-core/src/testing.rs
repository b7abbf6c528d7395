//! Assertion helpers for linter tests.
//!
//! Expected failures are written as highlight markup: the candidate with `*`
//! either side of the offending bytes, e.g. `"9*A*99"` or `"**"`.

use crate::error::LintErrorKind;
use crate::linter::LintFn;

/// Assert that `lint` accepts `data`.
#[track_caller]
pub fn assert_lint_ok(lint: LintFn, data: &str) {
    if let Err(e) = lint(data.as_bytes()) {
        panic!(
            "expected {data:?} to pass, got {} at {}",
            e.kind.name(),
            e.range.highlight(data.as_bytes(), '*')
        );
    }
}

/// Assert that `lint` rejects `data` with `kind` over the range shown by `markup`.
#[track_caller]
pub fn assert_lint_fail(lint: LintFn, data: &str, kind: LintErrorKind, markup: &str) {
    match lint(data.as_bytes()) {
        Ok(()) => panic!("expected {data:?} to fail with {}, but it passed", kind.name()),
        Err(e) => {
            assert!(
                e.range.fits(data.len()),
                "range {} escapes {data:?}",
                e.range
            );
            assert_eq!(e.kind, kind, "wrong kind for {data:?}");
            assert_eq!(
                e.range.highlight(data.as_bytes(), '*'),
                markup,
                "wrong range for {data:?}"
            );
        }
    }
}
