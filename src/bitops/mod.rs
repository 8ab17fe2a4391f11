//! Atomic bit operations over arrays of machine words.
//!
//! A bitmap is any `&[AtomicUsize]`: bit `nr` lives in word
//! `nr / BITS_PER_LONG` at position `nr % BITS_PER_LONG`. Callers own the
//! storage; these functions neither allocate nor keep state.
//!
//! Single-bit operations are atomic read-modify-writes on one word. `test_bit`
//! and the scans in [`find`] are relaxed loads and give no snapshot of the
//! array under concurrent writers.
//!
//! # Panics
//! Every function panics if a bit index (or scan bound) reaches past the end
//! of the word slice.

use core::sync::atomic::AtomicUsize;

use crate::atomic::{cas, order};

/// Owned bitmap.
pub mod bitmap;
/// Linear scans and population count.
pub mod find;

pub use bitmap::AtomicBitmap;
pub use find::{bitmap_weight, find_first_bit, find_first_zero_bit, find_next_bit, find_next_zero_bit};

/// Bits per machine word.
pub const BITS_PER_LONG: usize = usize::BITS as usize;

const LONG_SHIFT: u32 = BITS_PER_LONG.trailing_zeros();

/// Number of words needed to hold `nbits` bits (`BITS_TO_LONGS`).
#[inline(always)]
pub const fn bits_to_longs(nbits: usize) -> usize {
    nbits.div_ceil(BITS_PER_LONG)
}

/// Index of the word holding bit `nr`.
#[inline(always)]
pub const fn bit_word(nr: usize) -> usize {
    nr >> LONG_SHIFT
}

/// Mask selecting bit `nr` within its word.
#[inline(always)]
pub const fn bit_mask(nr: usize) -> usize {
    1usize << (nr & (BITS_PER_LONG - 1))
}

/// Mask of the valid bits in the last word of an `nbits`-bit bitmap.
///
/// All ones when `nbits` is a multiple of the word width.
#[inline(always)]
pub(crate) const fn last_word_mask(nbits: usize) -> usize {
    !0usize >> (nbits.wrapping_neg() & (BITS_PER_LONG - 1))
}

/// Views `len` caller-owned words as a bitmap without copying them.
///
/// # Safety
/// `ptr` must be non-null, aligned for `AtomicUsize`, valid for reads and
/// writes of `len` words for `'a`, and only accessed atomically while the
/// returned slice is alive.
#[inline(always)]
pub unsafe fn words_from_raw<'a>(ptr: *mut usize, len: usize) -> &'a [AtomicUsize] {
    // SAFETY: `AtomicUsize` has the size and bit validity of `usize`; the
    // caller upholds alignment, validity and the atomic-only access contract.
    unsafe { core::slice::from_raw_parts(ptr.cast::<AtomicUsize>(), len) }
}

/// Atomically sets bit `nr`.
#[inline(always)]
pub fn set_bit(nr: usize, addr: &[AtomicUsize]) {
    addr[bit_word(nr)].fetch_or(bit_mask(nr), order::RMW);
}

/// Atomically clears bit `nr`.
#[inline(always)]
pub fn clear_bit(nr: usize, addr: &[AtomicUsize]) {
    addr[bit_word(nr)].fetch_and(!bit_mask(nr), order::RMW);
}

/// Atomically toggles bit `nr`.
#[inline(always)]
pub fn change_bit(nr: usize, addr: &[AtomicUsize]) {
    addr[bit_word(nr)].fetch_xor(bit_mask(nr), order::RMW);
}

/// Returns whether bit `nr` is set.
///
/// A relaxed load: it does not synchronize with the writer of the bit.
#[inline(always)]
pub fn test_bit(nr: usize, addr: &[AtomicUsize]) -> bool {
    addr[bit_word(nr)].load(order::PLAIN) & bit_mask(nr) != 0
}

/// Atomically sets bit `nr` and returns whether it was already set.
///
/// Runs a compare-and-swap loop over the whole word; the prior state comes
/// from the word value the winning compare-and-swap replaced.
#[inline]
pub fn test_and_set_bit(nr: usize, addr: &[AtomicUsize]) -> bool {
    let mask = bit_mask(nr);
    cas::update(&addr[bit_word(nr)], |word| word | mask) & mask != 0
}

/// Atomically clears bit `nr` and returns whether it was set.
#[inline(always)]
pub fn test_and_clear_bit(nr: usize, addr: &[AtomicUsize]) -> bool {
    let mask = bit_mask(nr);
    addr[bit_word(nr)].fetch_and(!mask, order::RMW) & mask != 0
}

/// Atomically toggles bit `nr` and returns its previous state.
#[inline(always)]
pub fn test_and_change_bit(nr: usize, addr: &[AtomicUsize]) -> bool {
    let mask = bit_mask(nr);
    addr[bit_word(nr)].fetch_xor(mask, order::RMW) & mask != 0
}

/// Clears the first `nbits` bits, one relaxed store per word.
///
/// Not atomic as a whole. Bits past `nbits` in the last word are cleared too.
pub fn bitmap_zero(addr: &[AtomicUsize], nbits: usize) {
    for word in &addr[..bits_to_longs(nbits)] {
        word.store(0, order::PLAIN);
    }
}

/// Sets the first `nbits` bits, one relaxed store per word.
///
/// Not atomic as a whole. Bits past `nbits` in the last word end up clear.
pub fn bitmap_fill(addr: &[AtomicUsize], nbits: usize) {
    let len = bits_to_longs(nbits);
    if len == 0 {
        return;
    }
    for word in &addr[..len - 1] {
        word.store(!0, order::PLAIN);
    }
    addr[len - 1].store(last_word_mask(nbits), order::PLAIN);
}
