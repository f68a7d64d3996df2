//! Randomized correctness check for a sort function.
//!
//! Feeds random `i32` vectors of every length from 0 up to a maximum through a sort function and
//! stops at the first result that is not in ascending order or that is not a permutation of the
//! input.

use std::env;
use std::num::ParseIntError;

use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use thiserror::Error;

/// Largest length checked by [`Verifier::default`].
pub const DEFAULT_MAX_LEN: usize = 12345;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Array of length {len} is not sorted! First descent at index {index}.")]
    NotSorted { len: usize, index: usize },

    #[error("Array of length {len} does not hold the same elements after sorting!")]
    NotPermutation { len: usize },

    #[error("OVERRIDE_SEED is not a valid u64")]
    InvalidSeed(#[from] ParseIntError),
}

impl VerifyError {
    /// Length of the sequence that failed, if the error came from a check.
    pub fn failed_len(&self) -> Option<usize> {
        match self {
            VerifyError::NotSorted { len, .. } | VerifyError::NotPermutation { len } => Some(*len),
            VerifyError::InvalidSeed(_) => None,
        }
    }
}

/// Returns the first index `i` with `v[i] < v[i - 1]`, or `None` if `v` is ascending.
pub fn first_descent_by<T, F>(v: &[T], mut is_less: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> bool,
{
    v.windows(2)
        .position(|w| is_less(&w[1], &w[0]))
        .map(|pos| pos + 1)
}

pub fn is_sorted_by<T, F>(v: &[T], is_less: F) -> bool
where
    F: FnMut(&T, &T) -> bool,
{
    first_descent_by(v, is_less).is_none()
}

pub fn is_sorted<T: Ord>(v: &[T]) -> bool {
    is_sorted_by(v, |a, b| a.lt(b))
}

pub fn check_sorted<T: Ord>(v: &[T]) -> Result<(), VerifyError> {
    match first_descent_by(v, |a, b| a.lt(b)) {
        None => Ok(()),
        Some(index) => Err(VerifyError::NotSorted {
            len: v.len(),
            index,
        }),
    }
}

/// Checks that `after` holds the same multiset of elements as `before`.
pub fn check_permutation<T: Ord + Clone>(before: &[T], after: &[T]) -> Result<(), VerifyError> {
    let not_permutation = || VerifyError::NotPermutation { len: after.len() };

    if before.len() != after.len() {
        return Err(not_permutation());
    }

    let mut expected = before.to_vec();
    expected.sort_unstable();
    let mut got = after.to_vec();
    got.sort_unstable();

    if expected == got {
        Ok(())
    } else {
        Err(not_permutation())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Verifier {
    pub max_len: usize,
    pub seed: u64,
}

impl Default for Verifier {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_LEN,
            seed: thread_rng().gen(),
        }
    }
}

impl Verifier {
    pub fn new(max_len: usize, seed: u64) -> Self {
        Self { max_len, seed }
    }

    /// Like [`Verifier::default`], but takes the seed from the `OVERRIDE_SEED` environment
    /// variable if it is set.
    pub fn from_env() -> Result<Self, VerifyError> {
        let mut verifier = Self::default();

        if let Ok(seed) = env::var("OVERRIDE_SEED") {
            verifier.seed = seed.trim().parse()?;
        }

        Ok(verifier)
    }

    /// Sorts one random vector per length in `0..=max_len` with `sort_fn` and returns the first
    /// violation.
    pub fn run<F>(&self, mut sort_fn: F) -> Result<(), VerifyError>
    where
        F: FnMut(&mut [i32]),
    {
        let mut rng = StdRng::seed_from_u64(self.seed);

        for len in 0..=self.max_len {
            let original: Vec<i32> = (0..len).map(|_| rng.gen()).collect();

            let mut v = original.clone();
            sort_fn(&mut v);

            check_sorted(&v)?;
            check_permutation(&original, &v)?;
        }

        Ok(())
    }
}
