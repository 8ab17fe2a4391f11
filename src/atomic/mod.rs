//! Kernel-style atomic counters.
//!
//! `Atomic` and `Atomic64` carry the `atomic_t` / `atomic64_t` operation set
//! as methods. Each one is a single native atomic instruction, except `xchg`
//! and `add_unless`, which go through the shared compare-and-swap loop in
//! [`cas`].
//!
//! Important:
//! - Plain `read`/`set` are relaxed; they order nothing.
//! - Every read-modify-write is `SeqCst` (see [`order`]).

/// Compare-and-swap retry loops.
pub mod cas;
/// `Atomic` and `Atomic64`.
pub mod int;
/// Memory orderings.
pub mod order;

pub use cas::AtomicWord;
pub use int::{Atomic, Atomic64};
