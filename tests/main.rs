use std::cmp::Ordering;

use sort_test_tools::{instantiate_sort_tests, patterns, Sort};

#[cfg(feature = "verify")]
use lampsort::verify::{self, Verifier};

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "rust_lampsort_unstable".into()
    }

    fn sort<T>(v: &mut [T])
    where
        T: Ord,
    {
        lampsort::sort(v);
    }

    fn sort_by<T, F>(v: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        lampsort::sort_by(v, compare);
    }
}

instantiate_sort_tests!(SortImpl);

#[test]
fn scenario_interleaved() {
    let mut v = [9, 1, 8, 2, 7, 3, 6, 4, 5];
    lampsort::sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn scenario_reversed() {
    let mut v = [5, 4, 3, 2, 1];
    lampsort::sort(&mut v);
    assert_eq!(v, [1, 2, 3, 4, 5]);
}

#[test]
fn two_elements() {
    let mut v = [5, 3];
    lampsort::sort(&mut v);
    assert_eq!(v, [3, 5]);

    let mut v = [3, 5];
    lampsort::sort(&mut v);
    assert_eq!(v, [3, 5]);
}

#[test]
fn all_equal_unchanged() {
    let mut v = [4, 4, 4, 4, 4];
    lampsort::sort(&mut v);
    assert_eq!(v, [4, 4, 4, 4, 4]);
}

#[test]
fn empty_and_single() {
    let mut empty: [i32; 0] = [];
    lampsort::sort(&mut empty);
    assert_eq!(empty, []);

    let mut single = [42];
    lampsort::sort(&mut single);
    assert_eq!(single, [42]);

    // There is no null slice, the nearest thing is not calling sort at all.
    let absent: Option<&mut [i32]> = None;
    if let Some(v) = absent {
        lampsort::sort(v);
    }
}

#[test]
fn already_sorted_identical() {
    let sorted: Vec<i32> = (0..500).collect();
    let mut v = sorted.clone();
    lampsort::sort(&mut v);
    assert_eq!(v, sorted);
}

#[test]
fn sort_by_reverse() {
    let mut v = patterns::random(300);
    lampsort::sort_by(&mut v, |a, b| b.cmp(a));
    assert!(v.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn sort_by_key_abs() {
    let mut v = [-5i32, 4, 1, -3, 2];
    lampsort::sort_by_key(&mut v, |k| k.abs());
    assert_eq!(v, [1, 2, -3, 4, -5]);
}

#[test]
fn sort_by_partial_cmp_floats() {
    let mut floats = [5f64, 4.0, 1.0, 3.0, 2.0];
    lampsort::sort_by(&mut floats, |a, b| a.partial_cmp(b).unwrap());
    assert_eq!(floats, [1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn unstable_among_equal_keys() {
    // Last-element pivot swaps the pivot ahead of the equal elements in front of it.
    let mut v = [(1, 'a'), (1, 'b'), (1, 'c')];
    lampsort::sort_by_key(&mut v, |t| t.0);
    assert_eq!(v, [(1, 'c'), (1, 'b'), (1, 'a')]);
}

#[test]
fn quadratic_comparisons_on_sorted_input() {
    let len = 1_000;
    let mut comps = 0u64;
    let mut v: Vec<i32> = (0..len).collect();

    lampsort::sort_by(&mut v, |a, b| {
        comps += 1;
        a.cmp(b)
    });

    // Every partition peels off only the pivot: (len - 1) + (len - 2) + .. + 2, and one
    // comparison for the final pair.
    let expected = (len as u64 - 1) * (len as u64) / 2;
    assert_eq!(comps, expected);
}

#[test]
#[cfg(feature = "verify")]
fn randomized_lengths_sorted_and_permuted() {
    let verifier = Verifier::new(1_000, patterns::random_init_seed());
    let res = verifier.run(|v| lampsort::sort(v));

    assert_eq!(res, Ok(()), "seed: {}", verifier.seed);
}

#[test]
#[cfg(feature = "verify")]
fn verifier_reports_unsorted_length() {
    let verifier = Verifier::new(50, patterns::random_init_seed());

    // Leaves the last element where it was.
    let res = verifier.run(|v| {
        let len = v.len();
        if len > 1 {
            lampsort::sort(&mut v[..len - 1]);
        }
    });

    let err = res.unwrap_err();
    assert!(matches!(err, verify::VerifyError::NotSorted { .. }));
    assert!(err.failed_len().is_some_and(|len| len >= 2));
}
