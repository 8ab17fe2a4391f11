//! Compare-and-swap retry loops.
//!
//! `xchg`, `add_unless` and `test_and_set_bit` all reduce to "read the word,
//! compute a replacement, CAS it in, retry on mismatch". The loop lives here
//! once, generic over the native atomic word it runs on.

use core::sync::atomic::{AtomicI32, AtomicI64, AtomicUsize, Ordering};

use crossbeam_utils::Backoff;

use super::order;

/// Retries after which a contended loop is reported (with `tracing` enabled).
#[cfg(feature = "tracing")]
const CONTENDED_RETRIES: u32 = 64;

/// A native atomic word that supports a weak compare-and-swap.
pub trait AtomicWord {
    /// Plain value held by the word.
    type Value: Copy + Eq;

    /// Loads the current value.
    fn load_word(&self, order: Ordering) -> Self::Value;

    /// Weak compare-and-swap; may fail spuriously.
    ///
    /// # Errors
    /// Returns the value actually observed when it differs from `current`
    /// (or on a spurious failure).
    fn cas_weak(
        &self,
        current: Self::Value,
        new: Self::Value,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self::Value, Self::Value>;
}

macro_rules! impl_atomic_word {
    ($($atomic:ty => $value:ty),* $(,)?) => {
        $(
            impl AtomicWord for $atomic {
                type Value = $value;

                #[inline(always)]
                fn load_word(&self, order: Ordering) -> $value {
                    self.load(order)
                }

                #[inline(always)]
                fn cas_weak(
                    &self,
                    current: $value,
                    new: $value,
                    success: Ordering,
                    failure: Ordering,
                ) -> Result<$value, $value> {
                    self.compare_exchange_weak(current, new, success, failure)
                }
            }
        )*
    };
}

impl_atomic_word!(AtomicI32 => i32, AtomicI64 => i64, AtomicUsize => usize);

/// Replaces the word with `f(current)` and returns the value the winning
/// compare-and-swap replaced.
///
/// `f` may run several times under contention and must be pure.
#[inline]
pub fn update<A, F>(word: &A, mut f: F) -> A::Value
where
    A: AtomicWord + ?Sized,
    F: FnMut(A::Value) -> A::Value,
{
    match update_if(word, |current| Some(f(current))) {
        Ok(prev) | Err(prev) => prev,
    }
}

/// Replaces the word with `f(current)` while `f` returns `Some`.
///
/// Returns `Ok(previous)` from the winning compare-and-swap, or
/// `Err(current)` with the value that made `f` decline.
///
/// # Errors
/// `Err` carries the observed value when `f` returned `None`.
pub fn update_if<A, F>(word: &A, mut f: F) -> Result<A::Value, A::Value>
where
    A: AtomicWord + ?Sized,
    F: FnMut(A::Value) -> Option<A::Value>,
{
    let backoff = Backoff::new();
    #[cfg(feature = "tracing")]
    let mut retries: u32 = 0;

    let mut current = word.load_word(order::PLAIN);
    loop {
        let Some(new) = f(current) else {
            return Err(current);
        };
        match word.cas_weak(current, new, order::RMW, order::CAS_FAILURE) {
            Ok(prev) => return Ok(prev),
            Err(observed) => {
                current = observed;

                #[cfg(feature = "tracing")]
                if retries < CONTENDED_RETRIES {
                    retries += 1;
                    if retries == CONTENDED_RETRIES {
                        tracing::debug!(retries, "compare-and-swap loop contended");
                    }
                }

                backoff.spin();
            }
        }
    }
}
