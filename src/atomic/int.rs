//! `atomic_t` and `atomic64_t`.
//!
//! Both types are `#[repr(transparent)]` over the native atomic, so a
//! caller-owned integer can be viewed in place with `from_ptr`. Arithmetic
//! wraps on overflow, as the kernel's does.

use core::fmt;
use core::sync::atomic::{AtomicI32, AtomicI64};

use super::{cas, order};

macro_rules! atomic_int {
    ($(#[$meta:meta])* $name:ident, $inner:ty, $value:ty) => {
        $(#[$meta])*
        #[repr(transparent)]
        pub struct $name {
            inner: $inner,
        }

        impl $name {
            /// Creates a new atomic holding `value`.
            #[inline(always)]
            pub const fn new(value: $value) -> Self {
                Self {
                    inner: <$inner>::new(value),
                }
            }

            /// Views caller-owned memory as an atomic without copying it.
            ///
            /// # Safety
            /// `ptr` must be non-null, aligned to
            #[doc = concat!("`align_of::<", stringify!($inner), ">()`,")]
            /// valid for reads and writes for `'a`, and only accessed
            /// atomically while the returned reference is alive.
            #[inline(always)]
            pub unsafe fn from_ptr<'a>(ptr: *mut $value) -> &'a Self {
                // SAFETY: `Self` is `repr(transparent)` over the native atomic,
                // which has the same size as the integer; the caller upholds
                // alignment, validity and the atomic-only access contract.
                unsafe { &*ptr.cast::<Self>() }
            }

            /// Returns the underlying native atomic.
            #[inline(always)]
            pub fn as_native(&self) -> &$inner {
                &self.inner
            }

            /// Consumes the atomic, returning the contained value.
            #[inline(always)]
            pub fn into_inner(self) -> $value {
                self.inner.into_inner()
            }

            /// Plain load (`atomic_read`).
            #[inline(always)]
            pub fn read(&self) -> $value {
                self.inner.load(order::PLAIN)
            }

            /// Plain store (`atomic_set`).
            #[inline(always)]
            pub fn set(&self, value: $value) {
                self.inner.store(value, order::PLAIN);
            }

            /// Atomically adds `i`.
            #[inline(always)]
            pub fn add(&self, i: $value) {
                self.inner.fetch_add(i, order::RMW);
            }

            /// Atomically subtracts `i`.
            #[inline(always)]
            pub fn sub(&self, i: $value) {
                self.inner.fetch_sub(i, order::RMW);
            }

            /// Atomically adds one.
            #[inline(always)]
            pub fn inc(&self) {
                self.add(1);
            }

            /// Atomically subtracts one.
            #[inline(always)]
            pub fn dec(&self) {
                self.sub(1);
            }

            /// Atomically adds `i` and returns the new value.
            ///
            /// The new value is derived locally from the fetched one; only
            /// this caller needs it.
            #[inline(always)]
            pub fn add_return(&self, i: $value) -> $value {
                self.inner.fetch_add(i, order::RMW).wrapping_add(i)
            }

            /// Atomically subtracts `i` and returns the new value.
            #[inline(always)]
            pub fn sub_return(&self, i: $value) -> $value {
                self.inner.fetch_sub(i, order::RMW).wrapping_sub(i)
            }

            /// Atomically adds one and returns the new value.
            #[inline(always)]
            pub fn inc_return(&self) -> $value {
                self.add_return(1)
            }

            /// Atomically subtracts one and returns the new value.
            #[inline(always)]
            pub fn dec_return(&self) -> $value {
                self.sub_return(1)
            }

            /// Stores `new` and returns the previous value.
            ///
            /// Runs a compare-and-swap retry loop; it terminates under bounded
            /// contention but gives no fairness guarantee.
            #[inline]
            pub fn xchg(&self, new: $value) -> $value {
                cas::update(&self.inner, |_| new)
            }

            /// Stores `new` if the current value is `old`.
            ///
            /// Returns the value observed, which equals `old` on success.
            #[inline(always)]
            pub fn cmpxchg(&self, old: $value, new: $value) -> $value {
                match self
                    .inner
                    .compare_exchange(old, new, order::RMW, order::CAS_FAILURE)
                {
                    Ok(prev) | Err(prev) => prev,
                }
            }

            /// Subtracts `i`; returns whether the result is zero.
            #[inline(always)]
            pub fn sub_and_test(&self, i: $value) -> bool {
                self.sub_return(i) == 0
            }

            /// Adds one; returns whether the result is zero.
            #[inline(always)]
            pub fn inc_and_test(&self) -> bool {
                self.inc_return() == 0
            }

            /// Subtracts one; returns whether the result is zero.
            #[inline(always)]
            pub fn dec_and_test(&self) -> bool {
                self.dec_return() == 0
            }

            /// Adds `i`; returns whether the result is negative.
            #[inline(always)]
            pub fn add_negative(&self, i: $value) -> bool {
                self.add_return(i) < 0
            }

            /// Adds `a` unless the current value is `u`.
            ///
            /// Returns `true` if the addition happened.
            #[inline]
            pub fn add_unless(&self, a: $value, u: $value) -> bool {
                cas::update_if(&self.inner, |v| (v != u).then_some(v.wrapping_add(a))).is_ok()
            }

            /// Increments unless the current value is zero.
            ///
            /// Returns `true` if the increment happened.
            #[inline]
            pub fn inc_not_zero(&self) -> bool {
                self.add_unless(1, 0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl From<$value> for $name {
            fn from(value: $value) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.read()).finish()
            }
        }
    };
}

atomic_int!(
    /// A 32-bit atomic counter (`atomic_t`).
    Atomic,
    AtomicI32,
    i32
);

atomic_int!(
    /// A 64-bit atomic counter (`atomic64_t`).
    Atomic64,
    AtomicI64,
    i64
);
