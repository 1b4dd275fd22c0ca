use geq_core::{Output, Value};

// Shared by several test crates; not every helper is used in each.
#[allow(dead_code)]
pub(crate) fn plain_f64(values: &[Value]) -> Vec<f64> {
    values.iter().map(|v| v.as_f64().unwrap_or(f64::NAN)).collect()
}

/// NaN-aware equality of two `f64` slices.
#[allow(dead_code)]
pub(crate) fn assert_same(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        if e.is_nan() {
            assert!(a.is_nan(), "index {}: expected NaN, got {}", i, a);
        } else {
            assert_eq!(a, e, "index {}: {:?} vs {:?}", i, actual, expected);
        }
    }
}

#[allow(dead_code)]
pub(crate) fn assert_output(out: &Output, expected: &[f64]) {
    assert_same(&out.to_f64_vec(), expected);
}
