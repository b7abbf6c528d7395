//! Geographic coordinates encoded as ten-digit values.

use crate::charset::{digits_value, first_non_digit};
use crate::error::LintErrorKind;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult};

const COORDINATE_LEN: usize = 10;

fn lint_coordinate(
    data: &[u8],
    max: u64,
    bad_length: LintErrorKind,
    out_of_range: LintErrorKind,
) -> LintResult {
    if data.len() != COORDINATE_LEN {
        return fail(bad_length, ErrorRange::whole(data));
    }
    if let Some(pos) = first_non_digit(data) {
        return fail(LintErrorKind::NonDigitCharacter, ErrorRange::at(pos));
    }
    if digits_value(data) > max {
        return fail(out_of_range, ErrorRange::span(0, COORDINATE_LEN));
    }
    Ok(())
}

/// Validate a latitude: ten digits, at most `1800000000` (offset by 90 degrees).
pub fn latitude(data: &[u8]) -> LintResult {
    lint_coordinate(
        data,
        1_800_000_000,
        LintErrorKind::LatitudeInvalidLength,
        LintErrorKind::InvalidLatitude,
    )
}

/// Validate a longitude: ten digits, at most `3600000000` (offset by 180 degrees).
pub fn longitude(data: &[u8]) -> LintResult {
    lint_coordinate(
        data,
        3_600_000_000,
        LintErrorKind::LongitudeInvalidLength,
        LintErrorKind::InvalidLongitude,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_lint_fail, assert_lint_ok};

    #[test]
    fn test_latitude() {
        assert_lint_ok(latitude, "0279085848");
        assert_lint_ok(latitude, "0000000000");
        assert_lint_ok(latitude, "1800000000");
        assert_lint_fail(latitude, "", LintErrorKind::LatitudeInvalidLength, "**");
        assert_lint_fail(latitude, "027908584", LintErrorKind::LatitudeInvalidLength, "*027908584*");
        assert_lint_fail(latitude, "02790858481", LintErrorKind::LatitudeInvalidLength, "*02790858481*");
        assert_lint_fail(latitude, "1800000001", LintErrorKind::InvalidLatitude, "*1800000001*");
        assert_lint_fail(latitude, "02790x5848", LintErrorKind::NonDigitCharacter, "02790*x*5848");
    }

    #[test]
    fn test_longitude() {
        assert_lint_ok(longitude, "3015297971");
        assert_lint_ok(longitude, "0000000000");
        assert_lint_ok(longitude, "3600000000");
        assert_lint_fail(longitude, "301529797", LintErrorKind::LongitudeInvalidLength, "*301529797*");
        assert_lint_fail(longitude, "30152979711", LintErrorKind::LongitudeInvalidLength, "*30152979711*");
        assert_lint_fail(longitude, "3600000001", LintErrorKind::InvalidLongitude, "*3600000001*");
        assert_lint_fail(longitude, "9999999999", LintErrorKind::InvalidLongitude, "*9999999999*");
        assert_lint_fail(longitude, "x015297971", LintErrorKind::NonDigitCharacter, "*x*015297971");
    }
}
