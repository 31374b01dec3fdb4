#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

//! sortcheck answers one question: is this sequence already sorted? The following interface is
//! provided:
//!
//! | Family                    | Elements      | Incomparable pair       |
//! |---------------------------|---------------|-------------------------|
//! | [`is_sorted_by_mode`]     | `Ord`         | n/a                     |
//! | [`try_is_sorted`]         | `PartialOrd`  | [`IncomparableError`]   |
//! | [`is_sorted_safe`]        | `PartialOrd`  | `false`                 |
//!
//! Each family has a `_by_key` extension taking a mapping from elements to keys. The ordering is
//! chosen with [`Order`].
//!
//! Every check scans adjacent pairs once and stops at the first pair breaking the order, so it
//! costs `O(k)` comparisons where `k` is the index of that pair, and `O(1)` extra space. The input
//! is never mutated. [`compare_via_full_sort`] is the `O(n log n)` sort-and-compare baseline.

extern crate alloc;

mod baseline;
mod error;
mod ext;
mod order;
mod scan;
mod util;
mod value;

pub use baseline::compare_via_full_sort;
pub use error::{IncomparableError, ParseOrderError};
pub use ext::Sortedness;
pub use order::Order;
pub use util::{pairwise, Pairwise};
pub use value::Value;

/// Check that `v` is non-decreasing.
#[inline(always)]
pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    is_sorted_by_mode(v, Order::NonDecreasing)
}

/// Check that `v` is sorted under `order`.
#[inline(always)]
pub fn is_sorted_by_mode<T: Ord>(v: &[T], order: Order) -> bool {
    first_violation(v, order).is_none()
}

/// Check that the keys `f` maps `v` to are non-decreasing, or strictly increasing if `strict`.
#[inline(always)]
pub fn is_sorted_by_key<T, K: Ord>(v: &[T], f: impl FnMut(&T) -> K, strict: bool) -> bool {
    is_sorted_by_key_mode(v, Order::from_flags(strict, false), f)
}

/// Check that the keys `f` maps `v` to are sorted under `order`.
///
/// `f` is called once per element visited.
#[inline(always)]
pub fn is_sorted_by_key_mode<T, K: Ord>(v: &[T], order: Order, f: impl FnMut(&T) -> K) -> bool {
    scan::first_violation_total(v.iter().map(f), order, &mut K::cmp).is_none()
}

/// Check that `v` is non-increasing.
#[inline(always)]
pub fn is_non_increasing<T: Ord>(v: &[T]) -> bool {
    is_sorted_by_mode(v, Order::NonIncreasing)
}

/// Check that `v` is strictly decreasing.
#[inline(always)]
pub fn is_strictly_decreasing<T: Ord>(v: &[T]) -> bool {
    is_sorted_by_mode(v, Order::StrictlyDecreasing)
}

/// Check that `v` is sorted under `order`, failing on the first pair of elements that cannot be
/// compared.
///
/// A pair breaking the order before any incomparable pair is reached yields `Ok(false)`.
#[inline(always)]
pub fn try_is_sorted<T: PartialOrd>(v: &[T], order: Order) -> Result<bool, IncomparableError> {
    scan::first_violation(v, order, &mut |x, y| x.partial_cmp(y)).map(|i| i.is_none())
}

/// Like [`try_is_sorted`], comparing the keys `f` maps `v` to.
#[inline(always)]
pub fn try_is_sorted_by_key<T, K: PartialOrd>(
    v: &[T],
    order: Order,
    f: impl FnMut(&T) -> K,
) -> Result<bool, IncomparableError> {
    scan::first_violation(v.iter().map(f), order, &mut K::partial_cmp).map(|i| i.is_none())
}

/// Check that `v` is sorted under `order`, treating an incomparable pair as unsorted.
#[inline(always)]
pub fn is_sorted_safe<T: PartialOrd>(v: &[T], order: Order) -> bool {
    try_is_sorted(v, order).unwrap_or(false)
}

/// Like [`is_sorted_safe`], comparing the keys `f` maps `v` to.
#[inline(always)]
pub fn is_sorted_safe_by_key<T, K: PartialOrd>(
    v: &[T],
    order: Order,
    f: impl FnMut(&T) -> K,
) -> bool {
    try_is_sorted_by_key(v, order, f).unwrap_or(false)
}

/// Return the index `i` of the first pair `v[i], v[i + 1]` that breaks `order`.
#[inline(always)]
pub fn first_violation<T: Ord>(v: &[T], order: Order) -> Option<usize> {
    scan::first_violation_total(v, order, &mut |x, y| x.cmp(y))
}

/// Return the length of the longest prefix of `v` sorted under `order`.
#[inline(always)]
pub fn sorted_prefix_len<T: Ord>(v: &[T], order: Order) -> usize {
    first_violation(v, order).map_or(v.len(), |i| i + 1)
}

/// Check that the items of `iter` are sorted under `order`. Stops right after the second item of
/// the first violating pair.
#[inline(always)]
pub fn is_sorted_iter<I>(iter: I, order: Order) -> bool
where
    I: IntoIterator,
    I::Item: Ord,
{
    scan::first_violation_total(iter, order, &mut |x, y| x.cmp(y)).is_none()
}

/// Like [`try_is_sorted`] for any iterator.
#[inline(always)]
pub fn try_is_sorted_iter<I>(iter: I, order: Order) -> Result<bool, IncomparableError>
where
    I: IntoIterator,
    I::Item: PartialOrd,
{
    scan::first_violation(iter, order, &mut |x, y| x.partial_cmp(y)).map(|i| i.is_none())
}
