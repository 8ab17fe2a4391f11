//! Memory orderings used throughout the crate.
//!
//! The kernel vocabulary only promises "atomic". Every read-modify-write is
//! therefore sequentially consistent, while plain accesses (`atomic_read`,
//! `atomic_set`, `test_bit`, bitmap scans) are relaxed atomic accesses: the
//! `READ_ONCE`/`WRITE_ONCE` reading of a plain C access to a shared word.

use core::sync::atomic::Ordering;

/// Ordering of every read-modify-write and of a successful compare-and-swap.
pub const RMW: Ordering = Ordering::SeqCst;

/// Ordering of plain loads and stores.
pub const PLAIN: Ordering = Ordering::Relaxed;

/// Ordering of a failed compare-and-swap. A failure only re-seeds the loop.
pub const CAS_FAILURE: Ordering = Ordering::Relaxed;
