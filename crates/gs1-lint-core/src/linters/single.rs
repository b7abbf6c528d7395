//! Single-value flags and markers.

use crate::charset::CSET64;
use crate::error::LintErrorKind;
use crate::linters::single_char_in;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult};

/// Validate a yes/no flag: exactly `"0"` or `"1"`.
pub fn yesno(data: &[u8]) -> LintResult {
    single_char_in(data, b"01", LintErrorKind::NotZeroOrOne)
}

/// Validate a winding direction: `"0"` (face out), `"1"` (face in) or `"9"` (undetermined).
pub fn winding(data: &[u8]) -> LintResult {
    single_char_in(data, b"019", LintErrorKind::InvalidWindingDirection)
}

/// Validate an importer index: a single character from the file-safe base64 alphabet.
pub fn importeridx(data: &[u8]) -> LintResult {
    if data.len() != 1 {
        return fail(
            LintErrorKind::ImporterIdxMustBeOneCharacter,
            ErrorRange::whole(data),
        );
    }
    if !CSET64.contains(data[0] as usize) {
        return fail(LintErrorKind::InvalidImporterIdxCharacter, ErrorRange::at(0));
    }
    Ok(())
}

/// Validate a value consisting only of `'0'` characters.
pub fn zero(data: &[u8]) -> LintResult {
    only_repeated(data, b'0', LintErrorKind::NotZero)
}

/// Validate a value consisting only of `'-'` characters.
pub fn hyphen(data: &[u8]) -> LintResult {
    only_repeated(data, b'-', LintErrorKind::NotHyphen)
}

fn only_repeated(data: &[u8], expected: u8, kind: LintErrorKind) -> LintResult {
    if data.is_empty() || data.iter().any(|&b| b != expected) {
        return fail(kind, ErrorRange::whole(data));
    }
    Ok(())
}
