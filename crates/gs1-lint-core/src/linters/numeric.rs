//! Numeric content and GS1 check digits.

use crate::charset::{first_non_digit, is_digit};
use crate::error::LintErrorKind;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult};

/// Validate that every character is a digit. The empty value passes.
pub fn csetnumeric(data: &[u8]) -> LintResult {
    match first_non_digit(data) {
        Some(pos) => fail(LintErrorKind::NonDigitCharacter, ErrorRange::at(pos)),
        None => Ok(()),
    }
}

/// Validate a numeric value that is not zero.
///
/// Leading zeros are allowed; a value made only of zeros (or no digits) is not.
pub fn nonzero(data: &[u8]) -> LintResult {
    csetnumeric(data)?;
    if data.iter().all(|&b| b == b'0') {
        return fail(LintErrorKind::IllegalZeroValue, ErrorRange::whole(data));
    }
    Ok(())
}

/// Validate that the value contains at least one non-digit character.
pub fn hasnondigit(data: &[u8]) -> LintResult {
    if first_non_digit(data).is_none() {
        return fail(
            LintErrorKind::RequiresNonDigitCharacter,
            ErrorRange::whole(data),
        );
    }
    Ok(())
}

/// Validate a numeric value whose last digit is a GS1 mod-10 check digit.
///
/// Digits are weighted 3, 1, 3, ... from the right, excluding the check digit.
pub fn csum(data: &[u8]) -> LintResult {
    let Some((&check, body)) = data.split_last() else {
        return fail(LintErrorKind::TooShortForCheckDigit, ErrorRange::whole(data));
    };

    let mut weight: u32 = if data.len() % 2 == 0 { 3 } else { 1 };
    let mut sum: u32 = 0;
    for (pos, &b) in body.iter().enumerate() {
        if !is_digit(b) {
            return fail(LintErrorKind::NonDigitCharacter, ErrorRange::at(pos));
        }
        sum = (sum + weight * u32::from(b - b'0')) % 10;
        weight = 4 - weight;
    }

    let last = data.len() - 1;
    if !is_digit(check) {
        return fail(LintErrorKind::NonDigitCharacter, ErrorRange::at(last));
    }
    if u32::from(check - b'0') != (10 - sum) % 10 {
        return fail(LintErrorKind::IncorrectCheckDigit, ErrorRange::at(last));
    }
    Ok(())
}
