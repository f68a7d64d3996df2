//! Quicksort driven by an explicit work-list of intervals instead of recursion, after Lamport's
//! non-recursive formulation.

/// Inclusive range `[lo, hi]` of the slice that still needs ordering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Interval {
    lo: usize,
    hi: usize,
}

impl Interval {
    #[inline]
    fn span(self) -> usize {
        self.hi - self.lo
    }
}

/// Sorts `v` in place. `v` must hold at least two elements.
pub(crate) fn quicksort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(len >= 2);

    // Pops the most recently pushed interval first, so this grows like the call stack of the
    // recursive version would, O(len) for degenerate pivots.
    let mut work_list = vec![Interval { lo: 0, hi: len - 1 }];

    while let Some(interval) = work_list.pop() {
        debug_assert!(interval.lo <= interval.hi);
        debug_assert!(interval.hi < len);

        let Interval { lo, hi } = interval;

        match interval.span() {
            0 => {}
            1 => {
                if is_less(&v[hi], &v[lo]) {
                    v.swap(lo, hi);
                }
            }
            _ => {
                let pivot_pos = partition(&mut v[lo..=hi], is_less) + lo;

                // Clamp so neither side inverts when the pivot lands on a boundary.
                work_list.push(Interval {
                    lo,
                    hi: pivot_pos.saturating_sub(1).max(lo),
                });
                work_list.push(Interval {
                    lo: (pivot_pos + 1).min(hi),
                    hi,
                });
            }
        }
    }
}

/// Lomuto partition around the last element of `v`.
///
/// Returns the final position of the pivot. Every element left of it is less than the pivot, every
/// element right of it is not.
fn partition<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let pivot_pos = v.len() - 1;
    let mut write = 0;

    // The pivot stays at `pivot_pos` during the scan because only indices below it are swapped.
    for read in 0..pivot_pos {
        if is_less(&v[read], &v[pivot_pos]) {
            v.swap(write, read);
            write += 1;
        }
    }

    v.swap(write, pivot_pos);
    write
}
