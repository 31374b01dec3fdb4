use crate::{error::IncomparableError, order::Order};

/// Method-call access to the sortedness checks on slices.
///
/// ```
/// use sortcheck::{Order, Sortedness};
///
/// assert!([10, 8, 8, 5, 2].is_sorted_in(Order::NonIncreasing));
/// assert!(![1, 3, 2, 4].is_sorted_in(Order::NonDecreasing));
/// ```
pub trait Sortedness<T> {
    /// See [`is_sorted_by_mode`](crate::is_sorted_by_mode).
    fn is_sorted_in(&self, order: Order) -> bool
    where
        T: Ord;

    /// See [`is_sorted_by_key_mode`](crate::is_sorted_by_key_mode).
    fn is_sorted_by_key_in<K: Ord>(&self, order: Order, f: impl FnMut(&T) -> K) -> bool;

    /// See [`try_is_sorted`](crate::try_is_sorted).
    fn try_is_sorted_in(&self, order: Order) -> Result<bool, IncomparableError>
    where
        T: PartialOrd;
}

impl<T> Sortedness<T> for [T] {
    #[inline(always)]
    fn is_sorted_in(&self, order: Order) -> bool
    where
        T: Ord,
    {
        crate::is_sorted_by_mode(self, order)
    }

    #[inline(always)]
    fn is_sorted_by_key_in<K: Ord>(&self, order: Order, f: impl FnMut(&T) -> K) -> bool {
        crate::is_sorted_by_key_mode(self, order, f)
    }

    #[inline(always)]
    fn try_is_sorted_in(&self, order: Order) -> Result<bool, IncomparableError>
    where
        T: PartialOrd,
    {
        crate::try_is_sorted(self, order)
    }
}
