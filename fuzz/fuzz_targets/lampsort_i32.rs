#![no_main]

use libfuzzer_sys::fuzz_target;

use lampsort::verify;

fuzz_target!(|data: &[u8]| {
    // Trailing bytes that don't fill an i32 are ignored.
    let original: Vec<i32> = data
        .chunks_exact(4)
        .map(|bytes| i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
        .collect();

    let mut v = original.clone();
    lampsort::sort_by(&mut v, |a, b| a.cmp(b));

    assert_eq!(verify::check_sorted(&v), Ok(()));
    assert_eq!(verify::check_permutation(&original, &v), Ok(()));
});
