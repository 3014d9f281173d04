//! In-place heapsort over a slice, driven by a three-way comparator.
//!
//! The slice is treated as an implicit binary tree (children of `i` at
//! `2i + 1` and `2i + 2`). It is first arranged into a max-heap, then the
//! maximum is repeatedly swapped to the end of a shrinking heap range.
//!
//! ```
//! use point_list::heap::heapsort;
//!
//! let mut v = [5, 1, 4, 2, 3];
//! heapsort(&mut v, &|a: &i32, b: &i32| a.cmp(b));
//! assert_eq!(v, [1, 2, 3, 4, 5]);
//! ```

use core::cmp::Ordering;

/// A three-way ordering strategy.
///
/// `Less` places `a` before `b`, `Greater` places `b` before `a`, and `Equal`
/// means both have the same rank. Any `Fn(&T, &T) -> Ordering` closure is a
/// comparator.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Orders by `T`'s own [`Ord`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Compare<T> for Natural {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Orders by a key extracted from each element.
#[derive(Debug, Clone, Copy)]
pub struct ByKey<F>(pub F);

impl<T: ?Sized, K: Ord, F> Compare<T> for ByKey<F>
where
    F: Fn(&T) -> K,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.0)(a).cmp(&(self.0)(b))
    }
}

/// Flips another comparator, giving descending order.
#[derive(Debug, Clone, Copy)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// Sorts `items` ascending by `cmp`. Not stable.
///
/// Returns the number of element swaps performed; slices of length 0 or 1
/// are left alone and report 0.
pub fn heapsort<T, C>(items: &mut [T], cmp: &C) -> usize
where
    C: Compare<T> + ?Sized,
{
    let len = items.len();
    if len < 2 {
        return 0;
    }

    let mut swaps = 0;

    // Heapify from the last parent up to the root.
    for parent in (0..len / 2).rev() {
        swaps += sift_down(items, parent, len, cmp);
    }

    // `end` is the heap boundary; `end - 1` is never 0 here.
    for end in (2..=len).rev() {
        items.swap(0, end - 1);
        swaps += 1;
        swaps += sift_down(items, 0, end - 1, cmp);
    }

    swaps
}

/// Restores the max-heap property at `node` within `items[..end]`, assuming
/// both subtrees below it are already heaps.
///
/// The right child is preferred only when strictly greater than the left.
fn sift_down<T, C>(items: &mut [T], mut node: usize, end: usize, cmp: &C) -> usize
where
    C: Compare<T> + ?Sized,
{
    let mut swaps = 0;

    while let Some(left) = node
        .checked_mul(2)
        .and_then(|n| n.checked_add(1))
        .filter(|&left| left < end)
    {
        let right = left + 1;
        let right_wins =
            right < end && cmp.compare(&items[right], &items[left]) == Ordering::Greater;
        let larger = if right_wins { right } else { left };

        if cmp.compare(&items[larger], &items[node]) != Ordering::Greater {
            break;
        }

        items.swap(node, larger);
        swaps += 1;
        node = larger;
    }

    swaps
}

/// True when no adjacent pair of `items` is out of order under `cmp`.
pub fn is_sorted_by<T, C>(items: &[T], cmp: &C) -> bool
where
    C: Compare<T> + ?Sized,
{
    items
        .windows(2)
        .all(|pair| cmp.compare(&pair[0], &pair[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    fn ascending(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn sorts_small_arrays() {
        let mut v = [3, 1, 2];
        heapsort(&mut v, &ascending);
        assert_eq!(v, [1, 2, 3]);

        let mut v = [9, 8, 7, 6, 5, 4, 3, 2, 1, 0];
        heapsort(&mut v, &ascending);
        assert_eq!(v, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn empty_and_singleton_do_nothing() {
        let calls = Cell::new(0);
        let counting = |a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a.cmp(b)
        };

        let mut empty: [i32; 0] = [];
        assert_eq!(heapsort(&mut empty, &counting), 0);

        let mut one = [42];
        assert_eq!(heapsort(&mut one, &counting), 0);
        assert_eq!(one, [42]);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn two_elements() {
        let mut v = [2, 1];
        assert_eq!(heapsort(&mut v, &ascending), 1);
        assert_eq!(v, [1, 2]);

        // Already a heap: root is swapped to the end and back into place.
        let mut v = [1, 2];
        heapsort(&mut v, &ascending);
        assert_eq!(v, [1, 2]);
    }

    #[test]
    fn duplicates_survive() {
        let mut v = [4, 1, 4, 1, 4, 0, 0];
        heapsort(&mut v, &ascending);
        assert_eq!(v, [0, 0, 1, 1, 4, 4, 4]);
    }

    #[test]
    fn all_equal_needs_only_extraction_swaps() {
        let mut v = [7; 6];
        // No sift ever swaps on ties; only the n - 1 extraction swaps remain.
        assert_eq!(heapsort(&mut v, &ascending), 5);
        assert_eq!(v, [7; 6]);
    }

    #[test]
    fn reversed_and_by_key() {
        let mut v = [1, 5, 3, 4, 2];
        heapsort(&mut v, &Reversed(Natural));
        assert_eq!(v, [5, 4, 3, 2, 1]);

        let mut v = [-3i32, 1, -2, 0];
        heapsort(&mut v, &ByKey(|x: &i32| x.abs()));
        assert_eq!(v, [0, 1, -2, -3]);
    }

    #[test]
    fn inconsistent_comparator_does_not_panic() {
        let mut v = [5, 3, 8, 1, 9, 2, 7];
        let always_greater = |_: &i32, _: &i32| Ordering::Greater;
        heapsort(&mut v, &always_greater);

        let mut sorted = v;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 5, 7, 8, 9]);
    }

    #[test]
    fn sortedness_check() {
        assert!(is_sorted_by::<i32, _>(&[], &ascending));
        assert!(is_sorted_by(&[1, 1, 2], &ascending));
        assert!(!is_sorted_by(&[2, 1], &ascending));
    }
}
