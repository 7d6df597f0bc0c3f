#![no_main]

use libfuzzer_sys::fuzz_target;
use outplot::downsample::lttb;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let threshold = u16::from_le_bytes([data[0], data[1]]) as usize;

    // Sorted x axis, arbitrary (possibly non-finite) y values
    let ys: Vec<f64> = data[2..]
        .chunks_exact(8)
        .map(|c| f64::from_le_bytes(c.try_into().unwrap()))
        .collect();
    let xs: Vec<f64> = (0..ys.len()).map(|i| i as f64).collect();

    let (dx, dy) = lttb(&xs, &ys, threshold);
    assert_eq!(dx.len(), dy.len());
    if threshold > 2 && threshold < xs.len() {
        assert_eq!(dx.len(), threshold);
    }
});
