//! Seeded `i32` inputs for the test battery and the benchmarks.
//!
//! Every pattern derives its values from one seed per process. The battery prints that seed, and
//! setting `OVERRIDE_SEED` to it repeats a failing run with the same inputs.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;
use zipf::ZipfDistribution;

static FRESH_SEED_PER_CALL: AtomicBool = AtomicBool::new(false);

/// Uniformly random values over the whole `i32` range, almost all distinct.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Random values drawn from `range`. Small ranges make most elements equal to the pivot.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();
    seeded_rng().sample_iter(dist).take(len).collect()
}

/// Values in `1..=len` with Zipf distributed frequencies, a few small values dominate.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // Fails for len 0 and non-positive exponents.
    let Ok(dist) = ZipfDistribution::new(len, exponent) else {
        return Vec::new();
    };

    let mut rng = seeded_rng();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Random values where the first `sorted_percent` of the slice is already ascending.
pub fn sorted_prefix(len: usize, sorted_percent: f64) -> Vec<i32> {
    let mut v = random(len);
    let prefix_len = ((len as f64) * sorted_percent / 100.0).round() as usize;
    v[..prefix_len.min(len)].sort_unstable();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// Random values cut into `run_count` runs, each sorted ascending or descending at random.
pub fn saws(len: usize, run_count: usize) -> Vec<i32> {
    let run_len = (len / run_count.max(1)).max(1);
    let directions = random_uniform(len / run_len + 1, 0..=1);

    let mut v = random(len);
    for (run, direction) in v.chunks_mut(run_len).zip(directions) {
        if direction == 0 {
            run.sort_unstable();
        } else {
            run.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

/// Ascending first half followed by a descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut v = random(len);

    let (rising, falling) = v.split_at_mut(len / 2);
    rising.sort_unstable();
    falling.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// Every later pattern call draws a fresh seed. Benchmarks use this so that each sample sorts new
/// data.
///
/// Panics if `OVERRIDE_SEED` is set, the two requests contradict each other.
pub fn use_random_seed_each_time() {
    if env::var_os("OVERRIDE_SEED").is_some() {
        panic!("use_random_seed_each_time can't be combined with OVERRIDE_SEED");
    }

    FRESH_SEED_PER_CALL.store(true, Ordering::Release);
}

/// The seed all patterns derive from. Fixed for the process unless [`use_random_seed_each_time`]
/// was called.
///
/// Panics if `OVERRIDE_SEED` is set but isn't a `u64`, so a repeat run never silently uses some
/// other seed.
pub fn random_init_seed() -> u64 {
    if FRESH_SEED_PER_CALL.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(raw) => parse_override_seed(&raw),
        Err(_) => thread_rng().gen(),
    })
}

fn parse_override_seed(raw: &str) -> u64 {
    raw.trim()
        .parse()
        .unwrap_or_else(|err| panic!("OVERRIDE_SEED={raw:?} is not a valid u64: {err}"))
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
