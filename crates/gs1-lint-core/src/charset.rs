//! Character class tables and scanning helpers shared by linters.

/// A 256-bit membership table over byte values, most significant bit first.
///
/// Byte `v` is a member when bit `63 - v % 64` of word `v / 64` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bitfield<const N: usize>(pub [u64; N]);

impl<const N: usize> Bitfield<N> {
    /// Whether `v` is a member. Values beyond the table are not.
    pub const fn contains(&self, v: usize) -> bool {
        let word = v / 64;
        if word >= N {
            return false;
        }
        self.0[word] & (1u64 << (63 - v % 64)) != 0
    }
}

/// GS1 AI encodable character set 82.
pub const CSET82: Bitfield<4> = Bitfield([
    0x0000_0000_67ff_ffff, // ! " % & ' ( ) * + , - . / 0-9 : ; < = > ?
    0x7fff_ffe1_7fff_ffe0, // A-Z _ a-z
    0,
    0,
]);

/// File-safe base64 alphabet (GS1 AI encodable character set 64), without padding.
pub const CSET64: Bitfield<4> = Bitfield([
    0x0000_0000_0004_ffc0, // - 0-9
    0x7fff_ffe1_7fff_ffe0, // A-Z _ a-z
    0,
    0,
]);

/// Whether `b` is an ASCII digit.
pub const fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Position of the first non-digit in `data`.
pub fn first_non_digit(data: &[u8]) -> Option<usize> {
    data.iter().position(|&b| !is_digit(b))
}

/// Position of the first byte not in `set`.
pub fn first_outside<const N: usize>(data: &[u8], set: &Bitfield<N>) -> Option<usize> {
    data.iter().position(|&b| !set.contains(b as usize))
}

/// Numeric value of a run of ASCII digits. The caller checks the digits.
pub fn digits_value(data: &[u8]) -> u64 {
    data.iter()
        .fold(0u64, |acc, &b| acc.saturating_mul(10).saturating_add(u64::from(b.wrapping_sub(b'0'))))
}
