use approx::assert_relative_eq;

use crate::value::Value;

/// Asserts two `f64` slices are equal element-wise, where NaN only matches NaN.
pub(crate) fn assert_f64_slice_eq(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: actual {:?}, expected {:?}",
        actual,
        expected
    );
    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        if e.is_nan() {
            assert!(a.is_nan(), "index {}: expected NaN, got {} ({:?})", i, a, actual);
        } else {
            assert_relative_eq!(a, e);
        }
    }
}

/// Reads a plain output as `f64`s; non-numbers read as NaN.
pub(crate) fn plain_f64(values: &[Value]) -> Vec<f64> {
    values.iter().map(|v| v.as_f64().unwrap_or(f64::NAN)).collect()
}

/// Asserts a plain output holds exactly `expected` (NaN-aware).
pub(crate) fn assert_plain_eq(actual: &[Value], expected: &[f64]) {
    assert!(
        actual.iter().all(|v| matches!(v, Value::Number(_))),
        "plain output must only hold numbers: {:?}",
        actual
    );
    assert_f64_slice_eq(&plain_f64(actual), expected);
}
