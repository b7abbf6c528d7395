//! Error ranges within a candidate value.

use std::fmt;

/// The `(offset, len)` sub-range of a candidate value that caused a violation.
///
/// A range produced by a linter always lies within the data it was given:
/// `offset + len <= data.len()`. The empty range `(0, 0)` only ever appears
/// for an empty candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorRange {
    /// Start position of the offending bytes.
    pub offset: usize,
    /// Number of offending bytes.
    pub len: usize,
}

impl ErrorRange {
    /// Create a range from its parts.
    pub const fn span(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// The single byte at `pos`.
    pub const fn at(pos: usize) -> Self {
        Self { offset: pos, len: 1 }
    }

    /// The whole of `data`.
    pub const fn whole(data: &[u8]) -> Self {
        Self {
            offset: 0,
            len: data.len(),
        }
    }

    /// Re-base a range reported against a sub-slice starting at `by`.
    pub const fn shifted(self, by: usize) -> Self {
        Self {
            offset: self.offset.saturating_add(by),
            len: self.len,
        }
    }

    /// Exclusive end position.
    pub const fn end(&self) -> usize {
        self.offset.saturating_add(self.len)
    }

    /// Whether the range lies within a value of `data_len` bytes.
    pub fn fits(&self, data_len: usize) -> bool {
        self.offset
            .checked_add(self.len)
            .is_some_and(|end| end <= data_len)
    }

    /// Render `data` with `marker` placed either side of the range.
    ///
    /// `"9A99"` with range `(1, 1)` renders as `"9*A*99"`; an empty value
    /// renders as `"**"`. Ranges running past the data are clamped.
    pub fn highlight(&self, data: &[u8], marker: char) -> String {
        let start = self.offset.min(data.len());
        let end = self.end().min(data.len());

        let mut out = String::with_capacity(data.len() + 2 * marker.len_utf8());
        out.push_str(&String::from_utf8_lossy(&data[..start]));
        out.push(marker);
        out.push_str(&String::from_utf8_lossy(&data[start..end]));
        out.push(marker);
        out.push_str(&String::from_utf8_lossy(&data[end..]));
        out
    }
}

impl fmt::Display for ErrorRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.offset, self.end())
    }
}
