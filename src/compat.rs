//! Kernel spelling of the atomic and bitop API.
//!
//! Ported driver code can keep its call sites: names and argument order
//! follow the kernel (`atomic_add(i, v)`, `atomic_set(v, i)`,
//! `set_bit(nr, addr)`). Each function forwards to a method on
//! [`Atomic`]/[`Atomic64`] or to [`crate::bitops`].

use crate::atomic::{Atomic, Atomic64};

pub use crate::bitops::{
    bit_mask, bit_word, bitmap_fill, bitmap_weight, bitmap_zero, bits_to_longs, change_bit,
    clear_bit, find_first_bit, find_first_zero_bit, find_next_bit, find_next_zero_bit, set_bit,
    test_and_change_bit, test_and_clear_bit, test_and_set_bit, test_bit, BITS_PER_LONG,
};

/// `atomic_t`.
pub type AtomicT = Atomic;
/// `atomic64_t`.
pub type Atomic64T = Atomic64;

/// `ATOMIC_INIT(i)`.
#[inline(always)]
pub const fn atomic_init(i: i32) -> Atomic {
    Atomic::new(i)
}

/// `ATOMIC64_INIT(i)`.
#[inline(always)]
pub const fn atomic64_init(i: i64) -> Atomic64 {
    Atomic64::new(i)
}

/// Plain load of `v`.
#[inline(always)]
pub fn atomic_read(v: &Atomic) -> i32 {
    v.read()
}

/// Plain store of `i` into `v`.
#[inline(always)]
pub fn atomic_set(v: &Atomic, i: i32) {
    v.set(i);
}

/// Atomically adds `i` to `v`.
#[inline(always)]
pub fn atomic_add(i: i32, v: &Atomic) {
    v.add(i);
}

/// Atomically subtracts `i` from `v`.
#[inline(always)]
pub fn atomic_sub(i: i32, v: &Atomic) {
    v.sub(i);
}

/// Atomically increments `v`.
#[inline(always)]
pub fn atomic_inc(v: &Atomic) {
    v.inc();
}

/// Atomically decrements `v`.
#[inline(always)]
pub fn atomic_dec(v: &Atomic) {
    v.dec();
}

/// Adds `i` to `v`, returning the new value.
#[inline(always)]
pub fn atomic_add_return(i: i32, v: &Atomic) -> i32 {
    v.add_return(i)
}

/// Subtracts `i` from `v`, returning the new value.
#[inline(always)]
pub fn atomic_sub_return(i: i32, v: &Atomic) -> i32 {
    v.sub_return(i)
}

/// Increments `v`, returning the new value.
#[inline(always)]
pub fn atomic_inc_return(v: &Atomic) -> i32 {
    v.inc_return()
}

/// Decrements `v`, returning the new value.
#[inline(always)]
pub fn atomic_dec_return(v: &Atomic) -> i32 {
    v.dec_return()
}

/// Stores `new` into `v`, returning the old value.
#[inline]
pub fn atomic_xchg(v: &Atomic, new: i32) -> i32 {
    v.xchg(new)
}

/// Stores `new` into `v` if it holds `old`; returns the value observed.
#[inline(always)]
pub fn atomic_cmpxchg(v: &Atomic, old: i32, new: i32) -> i32 {
    v.cmpxchg(old, new)
}

/// Subtracts `i` from `v`; true if the result is zero.
#[inline(always)]
pub fn atomic_sub_and_test(i: i32, v: &Atomic) -> bool {
    v.sub_and_test(i)
}

/// Increments `v`; true if the result is zero.
#[inline(always)]
pub fn atomic_inc_and_test(v: &Atomic) -> bool {
    v.inc_and_test()
}

/// Decrements `v`; true if the result is zero.
#[inline(always)]
pub fn atomic_dec_and_test(v: &Atomic) -> bool {
    v.dec_and_test()
}

/// Adds `i` to `v`; true if the result is negative.
#[inline(always)]
pub fn atomic_add_negative(i: i32, v: &Atomic) -> bool {
    v.add_negative(i)
}

/// Adds `a` to `v` unless it holds `u`; true if the add happened.
#[inline]
pub fn atomic_add_unless(v: &Atomic, a: i32, u: i32) -> bool {
    v.add_unless(a, u)
}

/// Increments `v` unless it is zero; true if the increment happened.
#[inline]
pub fn atomic_inc_not_zero(v: &Atomic) -> bool {
    v.inc_not_zero()
}

/// Plain load of `v`.
#[inline(always)]
pub fn atomic64_read(v: &Atomic64) -> i64 {
    v.read()
}

/// Plain store of `i` into `v`.
#[inline(always)]
pub fn atomic64_set(v: &Atomic64, i: i64) {
    v.set(i);
}

/// Atomically adds `i` to `v`.
#[inline(always)]
pub fn atomic64_add(i: i64, v: &Atomic64) {
    v.add(i);
}

/// Atomically subtracts `i` from `v`.
#[inline(always)]
pub fn atomic64_sub(i: i64, v: &Atomic64) {
    v.sub(i);
}

/// Atomically increments `v`.
#[inline(always)]
pub fn atomic64_inc(v: &Atomic64) {
    v.inc();
}

/// Atomically decrements `v`.
#[inline(always)]
pub fn atomic64_dec(v: &Atomic64) {
    v.dec();
}

/// Adds `i` to `v`, returning the new value.
#[inline(always)]
pub fn atomic64_add_return(i: i64, v: &Atomic64) -> i64 {
    v.add_return(i)
}

/// Subtracts `i` from `v`, returning the new value.
#[inline(always)]
pub fn atomic64_sub_return(i: i64, v: &Atomic64) -> i64 {
    v.sub_return(i)
}

/// Increments `v`, returning the new value.
#[inline(always)]
pub fn atomic64_inc_return(v: &Atomic64) -> i64 {
    v.inc_return()
}

/// Decrements `v`, returning the new value.
#[inline(always)]
pub fn atomic64_dec_return(v: &Atomic64) -> i64 {
    v.dec_return()
}

/// Stores `new` into `v`, returning the old value.
#[inline]
pub fn atomic64_xchg(v: &Atomic64, new: i64) -> i64 {
    v.xchg(new)
}

/// Stores `new` into `v` if it holds `old`; returns the value observed.
#[inline(always)]
pub fn atomic64_cmpxchg(v: &Atomic64, old: i64, new: i64) -> i64 {
    v.cmpxchg(old, new)
}

/// Subtracts `i` from `v`; true if the result is zero.
#[inline(always)]
pub fn atomic64_sub_and_test(i: i64, v: &Atomic64) -> bool {
    v.sub_and_test(i)
}

/// Increments `v`; true if the result is zero.
#[inline(always)]
pub fn atomic64_inc_and_test(v: &Atomic64) -> bool {
    v.inc_and_test()
}

/// Decrements `v`; true if the result is zero.
#[inline(always)]
pub fn atomic64_dec_and_test(v: &Atomic64) -> bool {
    v.dec_and_test()
}

/// Adds `i` to `v`; true if the result is negative.
#[inline(always)]
pub fn atomic64_add_negative(i: i64, v: &Atomic64) -> bool {
    v.add_negative(i)
}

/// Adds `a` to `v` unless it holds `u`; true if the add happened.
#[inline]
pub fn atomic64_add_unless(v: &Atomic64, a: i64, u: i64) -> bool {
    v.add_unless(a, u)
}

/// Increments `v` unless it is zero; true if the increment happened.
#[inline]
pub fn atomic64_inc_not_zero(v: &Atomic64) -> bool {
    v.inc_not_zero()
}
