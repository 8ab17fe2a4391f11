//! Error type for checked bitmap access.

use core::fmt;

/// A bit index fell outside a bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRangeError {
    /// The offending bit index.
    pub bit: usize,
    /// Number of bits in the bitmap.
    pub len: usize,
}

impl fmt::Display for BitRangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bit {} out of range for bitmap of {} bits", self.bit, self.len)
    }
}

impl std::error::Error for BitRangeError {}
