use alloc::vec::Vec;

/// Return whether `v` equals a fully sorted copy of itself, descending if `reverse`.
///
/// `O(n log n)` time and `O(n)` extra space. Kept only as a reference point for the scanning
/// predicates; prefer [`is_sorted_by_mode`](crate::is_sorted_by_mode).
pub fn compare_via_full_sort<T: Ord + Clone>(v: &[T], reverse: bool) -> bool {
    let mut sorted: Vec<T> = v.to_vec();

    if reverse {
        sorted.sort_by(|x, y| y.cmp(x));
    } else {
        sorted.sort();
    }

    sorted.as_slice() == v
}
