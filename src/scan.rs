use core::cmp::Ordering;

use crate::{error::IncomparableError, order::Order};

/// Return the index `i` of the first pair `(x_i, x_(i+1))` of `iter` for which `cmp` does not
/// satisfy `order`, or `None` if every pair does.
///
/// Stops at the first violating or incomparable pair, so at most `i + 1` comparisons are made.
pub fn first_violation<I, F>(
    iter: I,
    order: Order,
    cmp: &mut F,
) -> Result<Option<usize>, IncomparableError>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Option<Ordering>,
{
    let mut iter = iter.into_iter();
    let Some(mut prev) = iter.next() else {
        return Ok(None);
    };

    for (index, next) in iter.enumerate() {
        match cmp(&prev, &next) {
            Some(ord) if order.holds(ord) => prev = next,
            Some(_) => {
                tracing::trace!(index, %order, "first violating pair");
                return Ok(Some(index));
            }
            None => {
                tracing::trace!(index, %order, "incomparable pair");
                return Err(IncomparableError { index });
            }
        }
    }

    Ok(None)
}

/// Like [`first_violation`] for a comparator that orders every pair.
#[inline(always)]
pub fn first_violation_total<I, F>(iter: I, order: Order, cmp: &mut F) -> Option<usize>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    // A total comparator never reports an incomparable pair
    first_violation(iter, order, &mut |x, y| Some(cmp(x, y))).unwrap_or(None)
}
