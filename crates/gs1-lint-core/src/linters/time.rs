//! Times of day: hours, minutes and seconds.

use crate::charset::{digits_value, first_non_digit};
use crate::error::LintErrorKind;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult, LintResultExt};

struct TwoDigitField {
    max: u64,
    too_short: LintErrorKind,
    too_long: LintErrorKind,
    illegal: LintErrorKind,
}

const HOUR: TwoDigitField = TwoDigitField {
    max: 23,
    too_short: LintErrorKind::HourTooShort,
    too_long: LintErrorKind::HourTooLong,
    illegal: LintErrorKind::IllegalHour,
};

const MINUTE: TwoDigitField = TwoDigitField {
    max: 59,
    too_short: LintErrorKind::MinuteTooShort,
    too_long: LintErrorKind::MinuteTooLong,
    illegal: LintErrorKind::IllegalMinute,
};

const SECOND: TwoDigitField = TwoDigitField {
    max: 59,
    too_short: LintErrorKind::SecondTooShort,
    too_long: LintErrorKind::SecondTooLong,
    illegal: LintErrorKind::IllegalSecond,
};

impl TwoDigitField {
    fn lint(&self, data: &[u8]) -> LintResult {
        if data.len() != 2 {
            let kind = if data.len() < 2 {
                self.too_short
            } else {
                self.too_long
            };
            return fail(kind, ErrorRange::whole(data));
        }
        if let Some(pos) = first_non_digit(data) {
            return fail(LintErrorKind::NonDigitCharacter, ErrorRange::at(pos));
        }
        if digits_value(data) > self.max {
            return fail(self.illegal, ErrorRange::span(0, 2));
        }
        Ok(())
    }
}

/// Validate an hour in `HH` format (00 to 23).
pub fn hh(data: &[u8]) -> LintResult {
    HOUR.lint(data)
}

/// Validate a minute in `MI` format (00 to 59).
pub fn mi(data: &[u8]) -> LintResult {
    MINUTE.lint(data)
}

/// Validate a second in `SS` format (00 to 59).
pub fn ss(data: &[u8]) -> LintResult {
    SECOND.lint(data)
}

/// Validate an hour with minute in `HHMI` format.
pub fn hhmi(data: &[u8]) -> LintResult {
    if data.len() != 4 {
        let kind = if data.len() < 4 {
            LintErrorKind::HourWithMinuteTooShort
        } else {
            LintErrorKind::HourWithMinuteTooLong
        };
        return fail(kind, ErrorRange::whole(data));
    }
    hh(&data[..2])?;
    mi(&data[2..]).shifted(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_lint_fail, assert_lint_ok};
    use test_case::test_case;

    #[test]
    fn test_hh_accepts_every_hour() {
        for h in 0..24 {
            assert_lint_ok(hh, &format!("{h:02}"));
        }
    }

    #[test]
    fn test_mi_and_ss_accept_every_minute() {
        for m in 0..60 {
            assert_lint_ok(mi, &format!("{m:02}"));
            assert_lint_ok(ss, &format!("{m:02}"));
        }
    }

    #[test_case("24", "*24*")]
    #[test_case("99", "*99*")]
    fn test_hh_rejects_value(data: &str, markup: &str) {
        assert_lint_fail(hh, data, LintErrorKind::IllegalHour, markup);
    }

    #[test_case("60", "*60*")]
    #[test_case("99", "*99*")]
    fn test_mi_rejects_value(data: &str, markup: &str) {
        assert_lint_fail(mi, data, LintErrorKind::IllegalMinute, markup);
        assert_lint_fail(ss, data, LintErrorKind::IllegalSecond, markup);
    }

    #[test_case("x0", "*x*0")]
    #[test_case("0x", "0*x*")]
    fn test_fields_reject_non_digit(data: &str, markup: &str) {
        assert_lint_fail(hh, data, LintErrorKind::NonDigitCharacter, markup);
        assert_lint_fail(mi, data, LintErrorKind::NonDigitCharacter, markup);
        assert_lint_fail(ss, data, LintErrorKind::NonDigitCharacter, markup);
    }

    #[test]
    fn test_fields_reject_length() {
        assert_lint_fail(hh, "", LintErrorKind::HourTooShort, "**");
        assert_lint_fail(hh, "1", LintErrorKind::HourTooShort, "*1*");
        assert_lint_fail(hh, "111", LintErrorKind::HourTooLong, "*111*");
        assert_lint_fail(mi, "1", LintErrorKind::MinuteTooShort, "*1*");
        assert_lint_fail(mi, "111", LintErrorKind::MinuteTooLong, "*111*");
        assert_lint_fail(ss, "", LintErrorKind::SecondTooShort, "**");
        assert_lint_fail(ss, "111", LintErrorKind::SecondTooLong, "*111*");
    }

    #[test_case("0000")]
    #[test_case("2359")]
    #[test_case("1200")]
    #[test_case("0059")]
    fn test_hhmi_accepts(data: &str) {
        assert_lint_ok(hhmi, data);
    }

    #[test]
    fn test_hhmi_rejects() {
        assert_lint_fail(hhmi, "2400", LintErrorKind::IllegalHour, "*24*00");
        assert_lint_fail(hhmi, "0060", LintErrorKind::IllegalMinute, "00*60*");
        assert_lint_fail(hhmi, "x000", LintErrorKind::NonDigitCharacter, "*x*000");
        assert_lint_fail(hhmi, "0x00", LintErrorKind::NonDigitCharacter, "0*x*00");
        assert_lint_fail(hhmi, "00x0", LintErrorKind::NonDigitCharacter, "00*x*0");
        assert_lint_fail(hhmi, "000x", LintErrorKind::NonDigitCharacter, "000*x*");
        assert_lint_fail(hhmi, "", LintErrorKind::HourWithMinuteTooShort, "**");
        assert_lint_fail(hhmi, "111", LintErrorKind::HourWithMinuteTooShort, "*111*");
        assert_lint_fail(hhmi, "11111", LintErrorKind::HourWithMinuteTooLong, "*11111*");
    }
}
