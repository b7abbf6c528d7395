//! Calendar dates in `YYMMDD` and `YYYYMMDD` formats.

use crate::charset::{digits_value, first_non_digit};
use crate::error::LintErrorKind;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult};

const DAYS_IN_MONTH: [u64; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year rule applied to a date's year digits.
#[derive(Clone, Copy)]
enum LeapRule {
    /// Two-digit year: every fourth year, so that `00` is a leap year.
    TwoDigit,
    /// Full Gregorian calendar.
    Gregorian,
}

impl LeapRule {
    fn is_leap(self, year: u64) -> bool {
        match self {
            Self::TwoDigit => year % 4 == 0,
            Self::Gregorian => year % 4 == 0 && (year % 100 != 0 || year % 400 == 0),
        }
    }
}

/// Check a date with `year_len` year digits. Day `00` is accepted here.
fn lint_date(data: &[u8], year_len: usize, rule: LeapRule) -> LintResult {
    let expected = year_len + 4;
    if data.len() != expected {
        let kind = if data.len() < expected {
            LintErrorKind::DateTooShort
        } else {
            LintErrorKind::DateTooLong
        };
        return fail(kind, ErrorRange::whole(data));
    }
    if let Some(pos) = first_non_digit(data) {
        return fail(LintErrorKind::NonDigitCharacter, ErrorRange::at(pos));
    }

    let year = digits_value(&data[..year_len]);
    let month = digits_value(&data[year_len..year_len + 2]);
    let day = digits_value(&data[year_len + 2..]);

    if !(1..=12).contains(&month) {
        return fail(LintErrorKind::IllegalMonth, ErrorRange::span(year_len, 2));
    }

    let mut max_day = DAYS_IN_MONTH[(month - 1) as usize];
    if month == 2 && !rule.is_leap(year) {
        max_day = 28;
    }
    if day > max_day {
        return fail(LintErrorKind::IllegalDay, ErrorRange::span(year_len + 2, 2));
    }
    Ok(())
}

fn reject_day_zero(data: &[u8], year_len: usize) -> LintResult {
    if &data[year_len + 2..] == b"00" {
        return fail(LintErrorKind::IllegalDay, ErrorRange::span(year_len + 2, 2));
    }
    Ok(())
}

/// Validate a `YYMMDD` date where day `00` stands for "end of month".
pub fn yymmd0(data: &[u8]) -> LintResult {
    lint_date(data, 2, LeapRule::TwoDigit)
}

/// Validate a `YYMMDD` date.
pub fn yymmdd(data: &[u8]) -> LintResult {
    yymmd0(data)?;
    reject_day_zero(data, 2)
}

/// Validate a `YYYYMMDD` date where day `00` stands for "end of month".
pub fn yyyymmd0(data: &[u8]) -> LintResult {
    lint_date(data, 4, LeapRule::Gregorian)
}

/// Validate a `YYYYMMDD` date.
pub fn yyyymmdd(data: &[u8]) -> LintResult {
    yyyymmd0(data)?;
    reject_day_zero(data, 4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_lint_fail, assert_lint_ok};
    use test_case::test_case;

    #[test_case("000606")]
    #[test_case("990606")]
    #[test_case("200131")]
    #[test_case("200229")]
    #[test_case("200430")]
    #[test_case("240229")]
    #[test_case("000229")]
    #[test_case("960229")]
    #[test_case("201231")]
    fn test_yymmdd_accepts(data: &str) {
        assert_lint_ok(yymmdd, data);
        assert_lint_ok(yymmd0, data);
    }

    #[test_case("x00131", "*x*00131")]
    #[test_case("2x0131", "2*x*0131")]
    #[test_case("20013x", "20013*x*")]
    fn test_yymmdd_rejects_non_digit(data: &str, markup: &str) {
        assert_lint_fail(yymmdd, data, LintErrorKind::NonDigitCharacter, markup);
    }

    #[test_case("", "**", LintErrorKind::DateTooShort)]
    #[test_case("11111", "*11111*", LintErrorKind::DateTooShort)]
    #[test_case("1111111", "*1111111*", LintErrorKind::DateTooLong)]
    fn test_yymmdd_rejects_length(data: &str, markup: &str, kind: LintErrorKind) {
        assert_lint_fail(yymmdd, data, kind, markup);
        assert_lint_fail(yymmd0, data, kind, markup);
    }

    #[test_case("200010", "20*00*10")]
    #[test_case("201310", "20*13*10")]
    #[test_case("209910", "20*99*10")]
    fn test_yymmdd_rejects_month(data: &str, markup: &str) {
        assert_lint_fail(yymmdd, data, LintErrorKind::IllegalMonth, markup);
    }

    #[test_case("200132", "2001*32*")]
    #[test_case("200230", "2002*30*")]
    #[test_case("200431", "2004*31*")]
    #[test_case("210229", "2102*29*")]
    #[test_case("230229", "2302*29*")]
    #[test_case("000230", "0002*30*")]
    fn test_yymmdd_rejects_day(data: &str, markup: &str) {
        assert_lint_fail(yymmdd, data, LintErrorKind::IllegalDay, markup);
        assert_lint_fail(yymmd0, data, LintErrorKind::IllegalDay, markup);
    }

    #[test]
    fn test_day_zero() {
        assert_lint_ok(yymmd0, "200600");
        assert_lint_fail(yymmdd, "200600", LintErrorKind::IllegalDay, "2006*00*");
        assert_lint_ok(yyyymmd0, "20200600");
        assert_lint_fail(yyyymmdd, "20200600", LintErrorKind::IllegalDay, "202006*00*");
    }

    #[test_case("20000606")]
    #[test_case("19990606")]
    #[test_case("20200131")]
    #[test_case("20200229")]
    #[test_case("20000229")]
    #[test_case("20201231")]
    fn test_yyyymmdd_accepts(data: &str) {
        assert_lint_ok(yyyymmdd, data);
        assert_lint_ok(yyyymmd0, data);
    }

    #[test]
    fn test_yyyymmdd_rejects() {
        assert_lint_fail(yyyymmdd, "", LintErrorKind::DateTooShort, "**");
        assert_lint_fail(yyyymmdd, "111111", LintErrorKind::DateTooShort, "*111111*");
        assert_lint_fail(yyyymmdd, "111111111", LintErrorKind::DateTooLong, "*111111111*");
        assert_lint_fail(yyyymmdd, "2020013x", LintErrorKind::NonDigitCharacter, "2020013*x*");
        assert_lint_fail(yyyymmdd, "20201310", LintErrorKind::IllegalMonth, "2020*13*10");
        assert_lint_fail(yyyymmdd, "20200230", LintErrorKind::IllegalDay, "202002*30*");
        assert_lint_fail(yyyymmdd, "20200931", LintErrorKind::IllegalDay, "202009*31*");
    }

    #[test_case("19000229", "190002*29*")]
    #[test_case("21000229", "210002*29*")]
    #[test_case("20210229", "202102*29*")]
    fn test_yyyymmdd_gregorian_leap_years(data: &str, markup: &str) {
        assert_lint_fail(yyyymmdd, data, LintErrorKind::IllegalDay, markup);
    }
}
