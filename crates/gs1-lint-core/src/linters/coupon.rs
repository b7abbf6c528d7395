//! Positive offer file coupon codes.
//!
//! Layout: format code (`0` or `1`), funder VLI `0`-`6` followed by a
//! funder ID of VLI + 6 digits, a six digit offer code, then a serial
//! number VLI followed by VLI + 6 digits.

use crate::charset::first_non_digit;
use crate::error::LintErrorKind;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult};

const OFFER_CODE_LEN: usize = 6;
const VLI_BASE: usize = 6;
const MAX_FUNDER_VLI: u8 = b'6';

/// Position within a candidate as its fields are consumed.
struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    fn next(&mut self) -> Option<u8> {
        let b = self.data.get(self.pos).copied()?;
        self.pos += 1;
        Some(b)
    }

    /// Range covering whatever is left, or the whole value once nothing is.
    fn rest(&self) -> ErrorRange {
        if self.remaining() == 0 {
            ErrorRange::whole(self.data)
        } else {
            ErrorRange::span(self.pos, self.remaining())
        }
    }

    fn skip(&mut self, n: usize, truncated: LintErrorKind) -> LintResult {
        if self.remaining() < n {
            return fail(truncated, self.rest());
        }
        self.pos += n;
        Ok(())
    }
}

/// Validate a positive offer file coupon code.
pub fn couponposoffer(data: &[u8]) -> LintResult {
    if let Some(pos) = first_non_digit(data) {
        return fail(LintErrorKind::NonDigitCharacter, ErrorRange::at(pos));
    }

    let mut cur = Cursor { data, pos: 0 };

    match cur.next() {
        None => return fail(LintErrorKind::CouponMissingFormatCode, ErrorRange::whole(data)),
        Some(b'0' | b'1') => {}
        Some(_) => return fail(LintErrorKind::CouponInvalidFormatCode, ErrorRange::at(0)),
    }

    let funder_vli = match cur.next() {
        None => return fail(LintErrorKind::CouponMissingFunderVli, ErrorRange::whole(data)),
        Some(b) if b > MAX_FUNDER_VLI => {
            return fail(LintErrorKind::CouponInvalidFunderLength, ErrorRange::at(cur.pos - 1))
        }
        Some(b) => usize::from(b - b'0'),
    };
    cur.skip(funder_vli + VLI_BASE, LintErrorKind::CouponTruncatedFunder)?;
    cur.skip(OFFER_CODE_LEN, LintErrorKind::CouponTruncatedOfferCode)?;

    let serial_vli = match cur.next() {
        None => return fail(LintErrorKind::CouponMissingSerialNumberVli, ErrorRange::whole(data)),
        Some(b) => usize::from(b - b'0'),
    };
    cur.skip(serial_vli + VLI_BASE, LintErrorKind::CouponTruncatedSerialNumber)?;

    if cur.remaining() != 0 {
        return fail(LintErrorKind::CouponExcessData, cur.rest());
    }
    Ok(())
}
