//! Lamport's non-recursive quicksort.
//!
//! An in-place, unstable quicksort that keeps pending sub-slices on an explicit work-list instead
//! of the call stack. Partitioning follows the Lomuto scheme with the last element of each
//! interval as pivot.

use core::cmp::Ordering;
use core::mem;

mod quicksort;
#[cfg(feature = "verify")]
pub mod verify;

/// Sorts `v` in ascending order, in place. Equal elements may end up in any order.
///
/// This sort is unstable (i.e., may reorder equal elements) and in-place. The only allocation is
/// the work-list of pending intervals.
///
/// # Current implementation
///
/// Quicksort with a Lomuto partition, that always picks the last element of an interval as pivot.
/// The pivot choice is deterministic, so already sorted, reverse sorted and all-equal inputs hit
/// the *O*(*n*^2) worst case. Average case is *O*(*n* \* log(*n*)).
///
/// # Examples
///
/// ```
/// let mut v = [9, 1, 8, 2, 7, 3, 6, 4, 5];
///
/// lampsort::sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    lamport_sort(v, |a, b| a.lt(b));
}

/// Sorts `v` in place with the ordering given by `compare`. Equal elements may end up in any
/// order.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but the slice still holds the
/// original set of elements afterwards. The same holds if `compare` panics.
///
/// ```
/// let mut v = [2, 7, 1, 8, 2, 8];
/// lampsort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert_eq!(v, [8, 8, 7, 2, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    lamport_sort(v, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts `v` in place by the key `f` extracts from each element. Elements with equal keys may end
/// up in any order.
///
/// `f` is called *O*(*n* \* log(*n*)) times on average, so an expensive key should be cached by
/// the caller.
///
/// ```
/// let mut v = [-5i32, 4, 1, -3, 2];
/// lampsort::sort_by_key(&mut v, |k| k.abs());
/// assert_eq!(v, [1, 2, -3, 4, -5]);
/// ```
#[inline]
pub fn sort_by_key<T, K, F>(v: &mut [T], mut f: F)
where
    F: FnMut(&T) -> K,
    K: Ord,
{
    lamport_sort(v, |a, b| f(a).lt(&f(b)));
}

// --- IMPL ---

#[inline]
fn lamport_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // Zero-sized values are indistinguishable, any order is sorted.
    if mem::size_of::<T>() == 0 {
        return;
    }

    if v.len() < 2 {
        return;
    }

    quicksort::quicksort(v, &mut is_less);
}
