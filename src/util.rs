/// Iterator over adjacent pairs of an underlying iterator.
///
/// Created by [`pairwise`]. Holds one element of look-behind.
#[derive(Debug, Clone)]
pub struct Pairwise<I: Iterator> {
    iter: I,
    prev: Option<I::Item>,
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.iter.next()?;
        let prev = self.prev.replace(next.clone())?;
        Some((prev, next))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.prev.is_none() {
            return (0, Some(0));
        }
        self.iter.size_hint()
    }
}

/// Return an iterator over overlapping pairs `(x_0, x_1), (x_1, x_2), ...` of `iter`.
///
/// Yields nothing for fewer than two elements.
pub fn pairwise<I>(iter: I) -> Pairwise<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    let mut iter = iter.into_iter();
    let prev = iter.next();
    Pairwise { iter, prev }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn adjacent_pairs() {
        let pairs: Vec<_> = pairwise([1, 2, 3, 4]).collect();
        assert_eq!(pairs, [(1, 2), (2, 3), (3, 4)]);
    }

    #[test]
    fn short_inputs_yield_nothing() {
        assert_eq!(pairwise(core::iter::empty::<u8>()).next(), None);
        assert_eq!(pairwise([7]).next(), None);
        assert_eq!(pairwise([7]).size_hint(), (0, Some(0)));
    }

    #[test]
    fn borrows_slices() {
        let v = ["a", "b", "c"];
        let pairs: Vec<_> = pairwise(&v).collect();
        assert_eq!(pairs, [(&"a", &"b"), (&"b", &"c")]);
    }

    #[test]
    fn size_hint_is_exact_for_slices() {
        let it = pairwise([1, 2, 3, 4, 5].iter());
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.count(), 4);
    }
}
