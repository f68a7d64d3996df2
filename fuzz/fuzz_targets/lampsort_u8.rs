#![no_main]

use libfuzzer_sys::fuzz_target;

use lampsort::verify;

fuzz_target!(|data: &[u8]| {
    let mut v = data.to_vec();
    lampsort::sort(&mut v);

    assert_eq!(verify::check_sorted(&v), Ok(()));
    assert_eq!(verify::check_permutation(data, &v), Ok(()));
});
