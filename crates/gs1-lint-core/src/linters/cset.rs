//! GS1 AI encodable character sets 82 and 64.

use crate::charset::{first_outside, CSET64, CSET82};
use crate::error::LintErrorKind;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult};

/// Most `=` pad characters permitted at the end of a CSET 64 value.
const CSET64_MAX_PADS: usize = 2;

/// Validate that every character belongs to GS1 character set 82.
pub fn cset82(data: &[u8]) -> LintResult {
    match first_outside(data, &CSET82) {
        Some(pos) => fail(LintErrorKind::InvalidCset82Character, ErrorRange::at(pos)),
        None => Ok(()),
    }
}

/// Validate a file-safe base64 value (GS1 character set 64).
///
/// Up to two trailing `=` pads are allowed, and only when the padded value
/// length is a multiple of three. Bad padding is reported over the pads
/// themselves.
pub fn cset64(data: &[u8]) -> LintResult {
    let pads = data.iter().rev().take_while(|&&b| b == b'=').count();
    let body = data.len() - pads;

    if pads > CSET64_MAX_PADS || (pads > 0 && data.len() % 3 != 0) {
        return fail(LintErrorKind::InvalidCset64Padding, ErrorRange::span(body, pads));
    }

    match first_outside(&data[..body], &CSET64) {
        Some(pos) => fail(LintErrorKind::InvalidCset64Character, ErrorRange::at(pos)),
        None => Ok(()),
    }
}
