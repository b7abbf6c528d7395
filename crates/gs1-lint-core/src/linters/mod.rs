//! The built-in linters.
//!
//! Every linter has the signature `fn(&[u8]) -> LintResult`, never panics,
//! and reports error ranges that lie within its input.

mod coupon;
mod cset;
mod date;
mod gcp;
mod geo;
mod iban;
mod iso3166;
mod iso5218;
mod numeric;
mod sequence;
mod single;
mod time;

pub use coupon::couponposoffer;
pub use cset::{cset64, cset82};
pub use date::{yymmd0, yymmdd, yyyymmd0, yyyymmdd};
pub use gcp::{gcppos1, gcppos1_with, gcppos2, gcppos2_with, GcpLookup, GcpStatus, GCP_MIN_LEN};
pub use geo::{latitude, longitude};
pub use iban::iban;
pub use iso3166::iso3166alpha2;
pub use iso5218::iso5218;
pub use numeric::{csetnumeric, csum, hasnondigit, nonzero};
pub use sequence::{pieceoftotal, posinseqslash};
pub use single::{hyphen, importeridx, winding, yesno, zero};
pub use time::{hh, hhmi, mi, ss};

use crate::error::LintErrorKind;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult};

/// Accept exactly one byte from `set`.
///
/// Wrong length reports the whole value; a single bad byte reports `(0, 1)`.
pub(crate) fn single_char_in(data: &[u8], set: &[u8], kind: LintErrorKind) -> LintResult {
    match data {
        [b] if set.contains(b) => Ok(()),
        [_] => fail(kind, ErrorRange::at(0)),
        _ => fail(kind, ErrorRange::whole(data)),
    }
}
