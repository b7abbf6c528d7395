//! ISO 3166-1 alpha-2 country codes.

use crate::charset::Bitfield;
use crate::error::LintErrorKind;
use crate::range::ErrorRange;
use crate::result::{fail, LintResult};

/// Assigned alpha-2 codes, indexed by `(c0 - 'A') * 26 + (c1 - 'A')`.
const ALPHA2_CODES: Bitfield<11> = Bitfield([
    0x1e9a_fb77_f7bd_bb7b,
    0xe4fc_21a8_012b_0070,
    0x003a_900d_f9df_a800,
    0xb160_181e_f002_02c0,
    0x00b8_d42f_8281_f2bf,
    0x3fff_eba4_d210_0080,
    0x023c_f1ca_8000_0002,
    0x008a_8fbf_e75c_ddf9,
    0x5982_0820_eaa1_0200,
    0x4002_0000_0000_0800,
    0x1020_0200_8000_0000,
]);

/// Validate an ISO 3166-1 alpha-2 country code.
pub fn iso3166alpha2(data: &[u8]) -> LintResult {
    match *data {
        [c0 @ b'A'..=b'Z', c1 @ b'A'..=b'Z']
            if ALPHA2_CODES.contains(usize::from(c0 - b'A') * 26 + usize::from(c1 - b'A')) =>
        {
            Ok(())
        }
        _ => fail(LintErrorKind::NotIso3166Alpha2, ErrorRange::whole(data)),
    }
}
