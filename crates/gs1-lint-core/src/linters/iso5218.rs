//! ISO/IEC 5218 biological sex codes.

use crate::error::LintErrorKind;
use crate::linters::single_char_in;
use crate::result::LintResult;

/// Accepted codes: not known, male, female, not applicable.
const ISO5218_CODES: &[u8] = b"0129";

/// Validate an ISO/IEC 5218 biological sex code.
///
/// The value must be exactly one of `"0"`, `"1"`, `"2"` or `"9"`.
///
/// A value of the wrong length (including the empty value) is reported over
/// its whole extent; a single disallowed character is reported at `(0, 1)`.
pub fn iso5218(data: &[u8]) -> LintResult {
    single_char_in(data, ISO5218_CODES, LintErrorKind::InvalidBiologicalSexCode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::ErrorRange;
    use crate::testing::{assert_lint_fail, assert_lint_ok};
    use test_case::test_case;

    #[test_case("0")]
    #[test_case("1")]
    #[test_case("2")]
    #[test_case("9")]
    fn test_accepts_codes(data: &str) {
        assert_lint_ok(iso5218, data);
    }

    #[test_case("3", "*3*")]
    #[test_case("4", "*4*")]
    #[test_case("5", "*5*")]
    #[test_case("6", "*6*")]
    #[test_case("7", "*7*")]
    #[test_case("8", "*8*")]
    #[test_case("/", "*/*" ; "slash")]
    #[test_case(":", "*:*" ; "colon")]
    #[test_case("", "**" ; "empty")]
    #[test_case("01", "*01*")]
    #[test_case("00", "*00*")]
    fn test_rejects(data: &str, markup: &str) {
        assert_lint_fail(iso5218, data, LintErrorKind::InvalidBiologicalSexCode, markup);
    }

    #[test]
    fn test_ranges() {
        assert_eq!(iso5218(b"3").unwrap_err().range, ErrorRange::span(0, 1));
        assert_eq!(iso5218(b"").unwrap_err().range, ErrorRange::span(0, 0));
        assert_eq!(iso5218(b"01").unwrap_err().range, ErrorRange::span(0, 2));
    }

    #[test]
    fn test_non_ascii_byte() {
        assert_eq!(iso5218(&[0xff]).unwrap_err().range, ErrorRange::at(0));
    }
}
