//! Contract properties that hold for every built-in linter.

use std::sync::Arc;
use std::thread;

use gs1_lint_core::{linters, ErrorRange, LintErrorKind, LinterId, LinterRegistry};
use proptest::prelude::*;

fn arbitrary_value() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..48),
        prop::collection::vec(b'0'..=b'9', 0..40),
        "[0-9A-Z/=_-]{0,40}".prop_map(String::into_bytes),
    ]
}

proptest! {
    #[test]
    fn every_linter_is_total_and_in_range(data in arbitrary_value()) {
        for id in LinterId::all() {
            if let Err(e) = id.lint_fn()(&data) {
                prop_assert!(
                    e.range.fits(data.len()),
                    "{} reported {} for {} bytes", id, e.range, data.len()
                );
                prop_assert!(
                    id.kinds().contains(&e.kind),
                    "{} reported undeclared kind {}", id, e.kind.name()
                );
                if !data.is_empty() {
                    prop_assert!(e.range.len > 0, "{} reported an empty range", id);
                }
            }
        }
    }

    #[test]
    fn every_linter_is_deterministic(data in arbitrary_value()) {
        for id in LinterId::all() {
            let lint = id.lint_fn();
            prop_assert_eq!(lint(&data), lint(&data));
        }
    }

    #[test]
    fn iso5218_accepts_exactly_its_codes(data in prop::collection::vec(any::<u8>(), 0..4)) {
        let expected = matches!(data.as_slice(), [b'0' | b'1' | b'2' | b'9']);
        prop_assert_eq!(linters::iso5218(&data).is_ok(), expected);
    }

    #[test]
    fn iso5218_reports_whole_value_on_wrong_length(
        data in prop::collection::vec(any::<u8>(), 0..64).prop_filter("length 1", |d| d.len() != 1)
    ) {
        let err = linters::iso5218(&data).unwrap_err();
        prop_assert_eq!(err.kind, LintErrorKind::InvalidBiologicalSexCode);
        prop_assert_eq!(err.range, ErrorRange::span(0, data.len()));
    }

    #[test]
    fn iso5218_reports_first_byte_on_bad_code(
        byte in any::<u8>().prop_filter("valid code", |b| !b"0129".contains(b))
    ) {
        let err = linters::iso5218(&[byte]).unwrap_err();
        prop_assert_eq!(err.kind, LintErrorKind::InvalidBiologicalSexCode);
        prop_assert_eq!(err.range, ErrorRange::span(0, 1));
    }

    #[test]
    fn csetnumeric_accepts_digit_strings(data in "[0-9]{0,30}") {
        prop_assert!(linters::csetnumeric(data.as_bytes()).is_ok());
    }

    #[test]
    fn registry_matches_direct_calls(data in arbitrary_value()) {
        let registry = LinterRegistry::with_defaults();
        for id in LinterId::all() {
            prop_assert_eq!(registry.lint(id.name(), &data).unwrap(), id.lint_fn()(&data));
        }
    }
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = Arc::new(LinterRegistry::with_defaults());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let value = format!("{}", i % 3);
                (0..200)
                    .map(|_| registry.lint("iso5218", value.as_bytes()).unwrap().is_ok())
                    .all(|ok| ok)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
