//! International Bank Account Numbers (ISO 13616).

use super::iso3166alpha2;
use crate::error::LintErrorKind;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult};

/// Values at or below this length cannot hold an account number.
const IBAN_MIN_LEN: usize = 10;
const IBAN_MAX_LEN: usize = 34;

/// Alphanumeric value of an IBAN character: `0`-`9` are 0..=9, `A`-`Z` are 10..=35.
const fn iban_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u32),
        b'A'..=b'Z' => Some((b - b'A') as u32 + 10),
        _ => None,
    }
}

/// Validate an IBAN: country code, length, alphabet and the mod-97 checksum.
pub fn iban(data: &[u8]) -> LintResult {
    if data.len() < 4 {
        return fail(LintErrorKind::IbanTooShort, ErrorRange::whole(data));
    }
    if iso3166alpha2(&data[..2]).is_err() {
        return fail(LintErrorKind::IllegalIbanCountryCode, ErrorRange::span(0, 2));
    }
    if data.len() > IBAN_MAX_LEN {
        return fail(LintErrorKind::IbanTooLong, ErrorRange::whole(data));
    }
    if data.len() <= IBAN_MIN_LEN {
        return fail(LintErrorKind::IbanTooShort, ErrorRange::whole(data));
    }

    // The first four characters are checked as if moved to the end.
    let rotated = (4..data.len()).chain(0..4);
    let mut remainder = 0u32;
    for pos in rotated {
        let Some(value) = iban_value(data[pos]) else {
            return fail(LintErrorKind::InvalidIbanCharacter, ErrorRange::at(pos));
        };
        let scale = if value < 10 { 10 } else { 100 };
        remainder = (remainder * scale + value) % 97;
    }

    if remainder != 1 {
        return fail(LintErrorKind::IncorrectIbanChecksum, ErrorRange::span(2, 2));
    }
    Ok(())
}
