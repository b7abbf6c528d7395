//! GS1 Company Prefix checks.
//!
//! The structural check only requires the shortest possible prefix to be
//! numeric. Deployments that hold a prefix list can plug in a [`GcpLookup`]
//! and register the result with [`gcppos1_with`] / [`gcppos2_with`].

use crate::charset::is_digit;
use crate::error::LintErrorKind;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult, LintResultExt};

/// The shortest GS1 Company Prefix has four digits.
pub const GCP_MIN_LEN: usize = 4;

/// Verdict of an external GS1 Company Prefix lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcpStatus {
    /// The value starts with an allocated prefix.
    Valid,
    /// No allocated prefix matches.
    Invalid,
    /// The data source could not be consulted.
    Offline,
}

/// Source of allocated GS1 Company Prefixes.
#[cfg_attr(test, mockall::automock)]
pub trait GcpLookup: Send + Sync {
    /// Look up the prefix at the start of `data`.
    fn lookup(&self, data: &[u8]) -> GcpStatus;
}

fn lint_structure(data: &[u8]) -> LintResult {
    if data.len() < GCP_MIN_LEN {
        return fail(LintErrorKind::TooShortForGcp, ErrorRange::whole(data));
    }
    if let Some(pos) = data[..GCP_MIN_LEN].iter().position(|&b| !is_digit(b)) {
        return fail(LintErrorKind::InvalidGcpPrefix, ErrorRange::at(pos));
    }
    Ok(())
}

/// Validate a value that starts with a GS1 Company Prefix.
pub fn gcppos1(data: &[u8]) -> LintResult {
    lint_structure(data)
}

/// As [`gcppos1`], then consult `lookup` for the prefix.
pub fn gcppos1_with(data: &[u8], lookup: &dyn GcpLookup) -> LintResult {
    lint_structure(data)?;
    match lookup.lookup(data) {
        GcpStatus::Valid => Ok(()),
        GcpStatus::Invalid => fail(LintErrorKind::InvalidGcpPrefix, ErrorRange::whole(data)),
        GcpStatus::Offline => fail(LintErrorKind::GcpDatasourceOffline, ErrorRange::whole(data)),
    }
}

/// Validate a value with a GS1 Company Prefix from its second character.
pub fn gcppos2(data: &[u8]) -> LintResult {
    if data.len() < 2 {
        return fail(LintErrorKind::TooShortForGcp, ErrorRange::whole(data));
    }
    gcppos1(&data[1..]).shifted(1)
}

/// As [`gcppos2`], then consult `lookup` for the prefix.
pub fn gcppos2_with(data: &[u8], lookup: &dyn GcpLookup) -> LintResult {
    if data.len() < 2 {
        return fail(LintErrorKind::TooShortForGcp, ErrorRange::whole(data));
    }
    gcppos1_with(&data[1..], lookup).shifted(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_lint_fail, assert_lint_ok};
    use mockall::predicate::eq;
    use test_case::test_case;

    #[test_case("01234")]
    #[test_case("0123")]
    #[test_case("0123A")]
    fn test_gcppos1_accepts(data: &str) {
        assert_lint_ok(gcppos1, data);
    }

    #[test_case("012", "*012*")]
    #[test_case("01", "*01*")]
    #[test_case("0", "*0*")]
    #[test_case("", "**" ; "empty")]
    fn test_gcppos1_rejects_short(data: &str, markup: &str) {
        assert_lint_fail(gcppos1, data, LintErrorKind::TooShortForGcp, markup);
    }

    #[test_case("012AA", "012*A*A")]
    #[test_case("01AAA", "01*A*AA")]
    #[test_case("0AAAA", "0*A*AAA")]
    #[test_case("AAAAA", "*A*AAAA")]
    fn test_gcppos1_rejects_prefix(data: &str, markup: &str) {
        assert_lint_fail(gcppos1, data, LintErrorKind::InvalidGcpPrefix, markup);
    }

    #[test_case("I01234")]
    #[test_case("I0123")]
    fn test_gcppos2_accepts(data: &str) {
        assert_lint_ok(gcppos2, data);
    }

    #[test_case("I012", "I*012*")]
    #[test_case("I0", "I*0*")]
    #[test_case("I", "*I*")]
    #[test_case("", "**" ; "empty")]
    fn test_gcppos2_rejects_short(data: &str, markup: &str) {
        assert_lint_fail(gcppos2, data, LintErrorKind::TooShortForGcp, markup);
    }

    #[test]
    fn test_gcppos2_rejects_prefix() {
        assert_lint_fail(gcppos2, "I01A3", LintErrorKind::InvalidGcpPrefix, "I01*A*3");
    }

    #[test]
    fn test_lookup_valid() {
        let mut lookup = MockGcpLookup::new();
        lookup
            .expect_lookup()
            .with(eq(&b"952001"[..]))
            .times(1)
            .return_const(GcpStatus::Valid);
        assert!(gcppos1_with(b"952001", &lookup).is_ok());
    }

    #[test]
    fn test_lookup_invalid() {
        let mut lookup = MockGcpLookup::new();
        lookup.expect_lookup().return_const(GcpStatus::Invalid);
        let err = gcppos1_with(b"952001", &lookup).unwrap_err();
        assert_eq!(err.kind, LintErrorKind::InvalidGcpPrefix);
        assert_eq!(err.range, ErrorRange::span(0, 6));
    }

    #[test]
    fn test_lookup_offline_is_rebased() {
        let mut lookup = MockGcpLookup::new();
        lookup
            .expect_lookup()
            .with(eq(&b"95200"[..]))
            .return_const(GcpStatus::Offline);
        let err = gcppos2_with(b"X95200", &lookup).unwrap_err();
        assert_eq!(err.kind, LintErrorKind::GcpDatasourceOffline);
        assert_eq!(err.range, ErrorRange::span(1, 5));
    }

    #[test]
    fn test_lookup_skipped_on_structural_failure() {
        let mut lookup = MockGcpLookup::new();
        lookup.expect_lookup().never();
        let err = gcppos1_with(b"95A", &lookup).unwrap_err();
        assert_eq!(err.kind, LintErrorKind::TooShortForGcp);
    }
}
