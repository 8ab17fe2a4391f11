//! Linear bitmap scans.
//!
//! The scans read word by word with relaxed loads. Under concurrent writers
//! the result may already be stale when it is returned; callers must not
//! assume a reported zero bit is still zero.

use core::sync::atomic::AtomicUsize;

use super::{bit_word, bits_to_longs, last_word_mask, BITS_PER_LONG};
use crate::atomic::order;

/// XOR applied to each word before looking for a one bit.
const FIND_SET: usize = 0;
const FIND_ZERO: usize = !0;

/// Index of the first bit at or after `offset` that is set in `word ^ invert`,
/// or `size` if there is none below `size`.
///
/// All-ones (resp. all-zero) words are skipped whole; the hit inside the
/// candidate word is located with `trailing_zeros`.
#[inline]
fn scan(addr: &[AtomicUsize], size: usize, offset: usize, invert: usize) -> usize {
    if offset >= size {
        return size;
    }

    let mut idx = bit_word(offset);
    let mut word = (addr[idx].load(order::PLAIN) ^ invert) & (!0usize << (offset & (BITS_PER_LONG - 1)));
    loop {
        if word != 0 {
            let bit = idx * BITS_PER_LONG + word.trailing_zeros() as usize;
            return bit.min(size);
        }
        idx += 1;
        if idx * BITS_PER_LONG >= size {
            return size;
        }
        word = addr[idx].load(order::PLAIN) ^ invert;
    }
}

/// Returns the index of the first zero bit below `size`, or `size` if all
/// of them are set.
#[inline]
pub fn find_first_zero_bit(addr: &[AtomicUsize], size: usize) -> usize {
    scan(addr, size, 0, FIND_ZERO)
}

/// Returns the index of the first zero bit in `offset..size`, or `size`.
#[inline]
pub fn find_next_zero_bit(addr: &[AtomicUsize], size: usize, offset: usize) -> usize {
    scan(addr, size, offset, FIND_ZERO)
}

/// Returns the index of the first set bit below `size`, or `size`.
#[inline]
pub fn find_first_bit(addr: &[AtomicUsize], size: usize) -> usize {
    scan(addr, size, 0, FIND_SET)
}

/// Returns the index of the first set bit in `offset..size`, or `size`.
#[inline]
pub fn find_next_bit(addr: &[AtomicUsize], size: usize, offset: usize) -> usize {
    scan(addr, size, offset, FIND_SET)
}

/// Counts the set bits among the first `size`.
pub fn bitmap_weight(addr: &[AtomicUsize], size: usize) -> usize {
    let len = bits_to_longs(size);
    addr[..len]
        .iter()
        .enumerate()
        .map(|(i, w)| {
            let mut bits = w.load(order::PLAIN);
            if i + 1 == len {
                bits &= last_word_mask(size);
            }
            bits.count_ones() as usize
        })
        .sum()
}
