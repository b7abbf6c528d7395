//! Counted sequences: piece of total and position in sequence.

use crate::charset::{first_non_digit, is_digit};
use crate::error::LintErrorKind;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult};

/// Validate a piece-of-total value: piece and total as equal-width digit runs.
///
/// Neither half may be zero and the piece may not exceed the total.
pub fn pieceoftotal(data: &[u8]) -> LintResult {
    if let Some(pos) = first_non_digit(data) {
        return fail(LintErrorKind::NonDigitCharacter, ErrorRange::at(pos));
    }
    if data.is_empty() || data.len() % 2 != 0 {
        return fail(
            LintErrorKind::InvalidLengthForPieceOfTotal,
            ErrorRange::whole(data),
        );
    }

    let half = data.len() / 2;
    let (piece, total) = data.split_at(half);

    if piece.iter().all(|&b| b == b'0') {
        return fail(LintErrorKind::ZeroPieceNumber, ErrorRange::span(0, half));
    }
    if total.iter().all(|&b| b == b'0') {
        return fail(LintErrorKind::ZeroTotalPieces, ErrorRange::span(half, half));
    }
    // Equal-width digit runs order the same lexically and numerically.
    if piece > total {
        return fail(LintErrorKind::PieceNumberExceedsTotal, ErrorRange::whole(data));
    }
    Ok(())
}

/// Validate a position in sequence written as `<pos>/<end>`.
///
/// Both numbers are required, neither may have a leading zero, and the
/// position may not exceed the end.
pub fn posinseqslash(data: &[u8]) -> LintResult {
    let malformed = || fail(LintErrorKind::PositionInSequenceMalformed, ErrorRange::whole(data));

    let slash = data.iter().position(|&b| !is_digit(b));
    let Some(slash) = slash.filter(|&s| s > 0 && data[s] == b'/') else {
        return malformed();
    };

    let (pos, end) = (&data[..slash], &data[slash + 1..]);
    if end.is_empty() || first_non_digit(end).is_some() {
        return malformed();
    }

    if pos[0] == b'0' {
        return fail(LintErrorKind::IllegalZeroPrefix, ErrorRange::span(0, pos.len()));
    }
    if end[0] == b'0' {
        return fail(
            LintErrorKind::IllegalZeroPrefix,
            ErrorRange::span(slash + 1, end.len()),
        );
    }

    // Without zero prefixes, a longer run is a larger number.
    if (pos.len(), pos) > (end.len(), end) {
        return fail(LintErrorKind::PositionExceedsEnd, ErrorRange::whole(data));
    }
    Ok(())
}
