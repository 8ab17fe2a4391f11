//! Owned atomic bitmaps (`DECLARE_BITMAP`).
//!
//! A dense, word-packed alternative to `Vec<AtomicBool>` that owns its
//! storage and bounds-checks indices against its bit length, not just its
//! word count.

use core::fmt;
use core::sync::atomic::AtomicUsize;

use super::{
    bits_to_longs, change_bit, clear_bit, find, set_bit, test_and_clear_bit, test_and_set_bit,
    test_bit,
};
use crate::atomic::order;
use crate::error::BitRangeError;

/// A word-packed atomic bitmap of fixed length.
pub struct AtomicBitmap {
    bits: usize,
    words: Box<[AtomicUsize]>,
}

impl AtomicBitmap {
    /// Creates a new bitmap with `bits` bits, all cleared.
    pub fn new(bits: usize) -> Self {
        let words = (0..bits_to_longs(bits)).map(|_| AtomicUsize::new(0)).collect();
        Self { bits, words }
    }

    /// Number of bits.
    #[inline(always)]
    pub fn len_bits(&self) -> usize {
        self.bits
    }

    /// Backing words, for use with the free functions in [`crate::bitops`].
    #[inline(always)]
    pub fn words(&self) -> &[AtomicUsize] {
        &self.words
    }

    /// Clears all bits, one relaxed store per word.
    pub fn clear_all(&self) {
        for w in &*self.words {
            w.store(0, order::PLAIN);
        }
    }

    /// Atomically sets `bit`.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    pub fn set(&self, bit: usize) {
        self.check(bit);
        set_bit(bit, &self.words);
    }

    /// Atomically clears `bit`.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    pub fn clear(&self, bit: usize) {
        self.check(bit);
        clear_bit(bit, &self.words);
    }

    /// Atomically toggles `bit`.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    pub fn change(&self, bit: usize) {
        self.check(bit);
        change_bit(bit, &self.words);
    }

    /// Returns whether `bit` is set.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    pub fn is_set(&self, bit: usize) -> bool {
        self.check(bit);
        test_bit(bit, &self.words)
    }

    /// Sets `bit` and returns whether it was already set.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    pub fn test_and_set(&self, bit: usize) -> bool {
        self.check(bit);
        test_and_set_bit(bit, &self.words)
    }

    /// Clears `bit` and returns whether it was set.
    ///
    /// # Panics
    /// Panics if `bit >= len_bits()`.
    pub fn test_and_clear(&self, bit: usize) -> bool {
        self.check(bit);
        test_and_clear_bit(bit, &self.words)
    }

    /// Checked [`set`](Self::set).
    ///
    /// # Errors
    /// Returns [`BitRangeError`] if `bit >= len_bits()`.
    pub fn try_set(&self, bit: usize) -> Result<(), BitRangeError> {
        self.range(bit)?;
        set_bit(bit, &self.words);
        Ok(())
    }

    /// Checked [`clear`](Self::clear).
    ///
    /// # Errors
    /// Returns [`BitRangeError`] if `bit >= len_bits()`.
    pub fn try_clear(&self, bit: usize) -> Result<(), BitRangeError> {
        self.range(bit)?;
        clear_bit(bit, &self.words);
        Ok(())
    }

    /// Checked [`is_set`](Self::is_set).
    ///
    /// # Errors
    /// Returns [`BitRangeError`] if `bit >= len_bits()`.
    pub fn try_is_set(&self, bit: usize) -> Result<bool, BitRangeError> {
        self.range(bit)?;
        Ok(test_bit(bit, &self.words))
    }

    /// Checked [`test_and_set`](Self::test_and_set).
    ///
    /// # Errors
    /// Returns [`BitRangeError`] if `bit >= len_bits()`.
    pub fn try_test_and_set(&self, bit: usize) -> Result<bool, BitRangeError> {
        self.range(bit)?;
        Ok(test_and_set_bit(bit, &self.words))
    }

    /// Checked [`test_and_clear`](Self::test_and_clear).
    ///
    /// # Errors
    /// Returns [`BitRangeError`] if `bit >= len_bits()`.
    pub fn try_test_and_clear(&self, bit: usize) -> Result<bool, BitRangeError> {
        self.range(bit)?;
        Ok(test_and_clear_bit(bit, &self.words))
    }

    /// First clear bit, or `len_bits()` if every bit is set.
    pub fn find_first_zero(&self) -> usize {
        find::find_first_zero_bit(&self.words, self.bits)
    }

    /// First clear bit at or after `offset`, or `len_bits()`.
    pub fn find_next_zero(&self, offset: usize) -> usize {
        find::find_next_zero_bit(&self.words, self.bits, offset)
    }

    /// First set bit, or `len_bits()` if none is set.
    pub fn find_first_set(&self) -> usize {
        find::find_first_bit(&self.words, self.bits)
    }

    /// First set bit at or after `offset`, or `len_bits()`.
    pub fn find_next_set(&self, offset: usize) -> usize {
        find::find_next_bit(&self.words, self.bits, offset)
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        find::bitmap_weight(&self.words, self.bits)
    }

    #[inline(always)]
    fn check(&self, bit: usize) {
        assert!(bit < self.bits, "bit {bit} out of range for bitmap of {} bits", self.bits);
    }

    #[inline(always)]
    fn range(&self, bit: usize) -> Result<(), BitRangeError> {
        if bit < self.bits {
            Ok(())
        } else {
            Err(BitRangeError {
                bit,
                len: self.bits,
            })
        }
    }
}

impl fmt::Debug for AtomicBitmap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicBitmap")
            .field("bits", &self.bits)
            .field("ones", &self.count_ones())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bitmap_basic() {
        let b = AtomicBitmap::new(130);
        assert_eq!(b.len_bits(), 130);
        assert_eq!(b.words().len(), bits_to_longs(130));

        assert!(!b.is_set(0));
        assert!(!b.test_and_set(0));
        assert!(b.is_set(0));
        assert!(b.test_and_set(0));

        assert!(!b.test_and_set(129));
        assert!(b.is_set(129));
        assert_eq!(b.count_ones(), 2);

        b.clear_all();
        assert!(!b.is_set(0));
        assert!(!b.is_set(129));
        assert_eq!(b.count_ones(), 0);
    }

    #[test]
    fn scans_stop_at_len() {
        let b = AtomicBitmap::new(3);
        for bit in 0..3 {
            b.set(bit);
        }
        assert_eq!(b.find_first_zero(), 3);
        b.change(1);
        assert_eq!(b.find_first_zero(), 1);
        assert_eq!(b.find_next_zero(2), 3);
        assert_eq!(b.find_next_set(1), 2);
    }

    #[test]
    fn checked_access_reports_range() {
        let b = AtomicBitmap::new(10);
        assert_eq!(b.try_set(9), Ok(()));
        assert_eq!(b.try_is_set(9), Ok(true));
        assert_eq!(b.try_set(10), Err(BitRangeError { bit: 10, len: 10 }));
        assert_eq!(b.try_test_and_clear(9), Ok(true));
        assert_eq!(b.try_clear(9), Ok(()));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn unchecked_access_panics_past_len() {
        // 10 bits still occupy a whole word; the bitmap rejects the slack.
        let b = AtomicBitmap::new(10);
        b.set(10);
    }
}
