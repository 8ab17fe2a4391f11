//! # `katomic` - Kernel-Style Atomics and Bitops
//!
//! The Linux kernel's `atomic_t` / `atomic64_t` and bit-manipulation
//! vocabulary, expressed over Rust's native atomics. Driver code written
//! against that vocabulary ports call-for-call; nothing here adds
//! synchronization beyond single-word atomic read-modify-write.
//!
//! ## Guarantees
//!
//! - **Linearizable per word**: every read-modify-write on a word appears
//!   indivisible to all other operations on that word.
//! - **Sequentially consistent RMW**: the kernel vocabulary does not state
//!   an ordering, so read-modify-writes use `SeqCst`. Plain accesses
//!   (`read`, `set`, `test_bit`, scans) are relaxed.
//! - **No hidden state**: the crate never allocates on behalf of callers
//!   (except [`AtomicBitmap`], which owns its words) and needs no setup.
//! - **Bounded retries only**: `xchg`, `add_unless` and `test_and_set_bit`
//!   are compare-and-swap loops; they complete under bounded contention
//!   but carry no fairness bound.
//!
//! ## Layout
//!
//! 1. [`atomic`]: `Atomic` (`atomic_t`) and `Atomic64` (`atomic64_t`), with
//!    the shared compare-and-swap loop and the ordering policy.
//! 2. [`bitops`]: bit operations and scans over `&[AtomicUsize]`, plus the
//!    owned [`AtomicBitmap`].
//! 3. [`compat`]: the same operations under their kernel names and
//!    argument order.
//!
//! ## Features
//!
//! - `tracing`: report contended compare-and-swap loops through `tracing`.
//!
//! ## Example
//!
//! ```rust
//! use core::sync::atomic::AtomicUsize;
//! use katomic::compat::*;
//!
//! let refs = atomic_init(1);
//! atomic_inc(&refs);
//! assert!(!atomic_dec_and_test(&refs));
//! assert!(atomic_dec_and_test(&refs));
//!
//! let map: Vec<AtomicUsize> = (0..bits_to_longs(100)).map(|_| AtomicUsize::new(0)).collect();
//! assert!(!test_and_set_bit(0, &map));
//! set_bit(1, &map);
//! assert_eq!(find_first_zero_bit(&map, 100), 2);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::inline_always)]

pub mod atomic;
pub mod bitops;
pub mod compat;
pub mod error;

pub use atomic::{Atomic, Atomic64};
pub use bitops::{bits_to_longs, AtomicBitmap, BITS_PER_LONG};
pub use error::BitRangeError;
