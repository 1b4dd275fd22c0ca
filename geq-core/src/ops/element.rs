// geq-core/src/ops/element.rs

use crate::outcome::Outcome;
use crate::typed::LaneValue;
use crate::value::{Scalar, Value};

/// 2^63, the first `f64` past `i64::MAX`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Compares two scalars: `One` iff `x >= y`.
///
/// Numbers use IEEE `>=` (so any NaN operand gives `Zero`), strings use
/// lexicographic byte order. A number is never ordered against a string;
/// that pair is `NotComparable`.
#[inline]
pub fn geq(x: Scalar<'_>, y: Scalar<'_>) -> Outcome {
    match (x, y) {
        (Scalar::Number(a), Scalar::Number(b)) => geq_number(a, b),
        (Scalar::Str(a), Scalar::Str(b)) => Outcome::from_bool(a >= b),
        _ => Outcome::NotComparable,
    }
}

#[inline]
pub fn geq_number(x: f64, y: f64) -> Outcome {
    Outcome::from_bool(x >= y)
}

/// Screens two dynamic values and compares them when both are scalars.
#[inline]
pub fn geq_values(x: &Value, y: &Value) -> Outcome {
    match (x.as_scalar(), y.as_scalar()) {
        (Some(a), Some(b)) => geq(a, b),
        _ => Outcome::NotComparable,
    }
}

/// Compares two typed lanes exactly. Integer pairs compare as `i64`; an
/// integer against a float compares without rounding either side.
#[inline]
pub(crate) fn geq_lanes(x: LaneValue, y: LaneValue) -> Outcome {
    let holds = match (x, y) {
        (LaneValue::Int(a), LaneValue::Int(b)) => a >= b,
        (LaneValue::Float(a), LaneValue::Float(b)) => a >= b,
        (LaneValue::Int(a), LaneValue::Float(b)) => int_geq_float(a, b),
        (LaneValue::Float(a), LaneValue::Int(b)) => float_geq_int(a, b),
    };
    Outcome::from_bool(holds)
}

/// Compares a typed lane against a dynamic value.
#[inline]
pub(crate) fn geq_lane_value(x: LaneValue, y: &Value) -> Outcome {
    match y.as_scalar() {
        Some(Scalar::Number(b)) => geq_lanes(x, LaneValue::Float(b)),
        _ => Outcome::NotComparable,
    }
}

// For integer `a`: a >= b iff a >= ceil(b).
fn int_geq_float(a: i64, b: f64) -> bool {
    if b.is_nan() || b >= TWO_POW_63 {
        false
    } else if b < -TWO_POW_63 {
        true
    } else {
        a >= b.ceil() as i64
    }
}

// For integer `b`: a >= b iff floor(a) >= b.
fn float_geq_int(a: f64, b: i64) -> bool {
    if a.is_nan() || a < -TWO_POW_63 {
        false
    } else if a >= TWO_POW_63 {
        true
    } else {
        a.floor() as i64 >= b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(geq(Scalar::Number(5.0), Scalar::Number(4.0)), Outcome::One);
        assert_eq!(geq(Scalar::Number(4.0), Scalar::Number(4.0)), Outcome::One);
        assert_eq!(geq(Scalar::Number(3.0), Scalar::Number(4.0)), Outcome::Zero);
        assert_eq!(geq(Scalar::Number(-0.0), Scalar::Number(0.0)), Outcome::One);
    }

    #[test]
    fn test_nan_is_never_geq() {
        assert_eq!(geq_number(f64::NAN, 1.0), Outcome::Zero);
        assert_eq!(geq_number(1.0, f64::NAN), Outcome::Zero);
        assert_eq!(geq_number(f64::NAN, f64::NAN), Outcome::Zero);
    }

    #[test]
    fn test_strings() {
        assert_eq!(geq(Scalar::Str("b"), Scalar::Str("aa")), Outcome::One);
        assert_eq!(geq(Scalar::Str("aa"), Scalar::Str("aa")), Outcome::One);
        assert_eq!(geq(Scalar::Str("a"), Scalar::Str("aa")), Outcome::Zero);
        assert_eq!(geq(Scalar::Str(""), Scalar::Str("")), Outcome::One);
    }

    #[test]
    fn test_mixed_kinds_are_not_comparable() {
        assert_eq!(geq(Scalar::Number(5.0), Scalar::Str("5")), Outcome::NotComparable);
        assert_eq!(geq(Scalar::Str("a"), Scalar::Number(0.0)), Outcome::NotComparable);
    }

    #[test]
    fn test_values() {
        assert_eq!(geq_values(&Value::from(2.0), &Value::from(1.0)), Outcome::One);
        assert_eq!(geq_values(&Value::Null, &Value::from(1.0)), Outcome::NotComparable);
        assert_eq!(geq_values(&Value::from(1.0), &Value::Bool(true)), Outcome::NotComparable);
        assert_eq!(geq_lane_value(LaneValue::Int(3), &Value::from(3.0)), Outcome::One);
        assert_eq!(geq_lane_value(LaneValue::Float(3.0), &Value::from("3")), Outcome::NotComparable);
        assert_eq!(geq_lane_value(LaneValue::Int(3), &Value::Null), Outcome::NotComparable);
    }

    #[test]
    fn test_i64_lanes_keep_full_precision() {
        let big = 1i64 << 53;
        assert_eq!(geq_lanes(LaneValue::Int(big), LaneValue::Int(big + 1)), Outcome::Zero);
        assert_eq!(geq_lanes(LaneValue::Int(big + 1), LaneValue::Int(big)), Outcome::One);
        assert_eq!(geq_lanes(LaneValue::Int(i64::MAX), LaneValue::Int(i64::MAX - 1)), Outcome::One);
        // 2^53 + 1 is not an f64; the float side stays 2^53.
        assert_eq!(geq_lanes(LaneValue::Float(big as f64), LaneValue::Int(big + 1)), Outcome::Zero);
        assert_eq!(geq_lanes(LaneValue::Int(big + 1), LaneValue::Float(big as f64)), Outcome::One);
    }

    #[test]
    fn test_int_against_fractional_float() {
        assert_eq!(geq_lanes(LaneValue::Int(0), LaneValue::Float(-0.5)), Outcome::One);
        assert_eq!(geq_lanes(LaneValue::Float(-0.5), LaneValue::Int(0)), Outcome::Zero);
        assert_eq!(geq_lanes(LaneValue::Int(2), LaneValue::Float(2.5)), Outcome::Zero);
        assert_eq!(geq_lanes(LaneValue::Float(2.5), LaneValue::Int(2)), Outcome::One);
        assert_eq!(geq_lanes(LaneValue::Int(-3), LaneValue::Float(-3.0)), Outcome::One);
        assert_eq!(geq_lanes(LaneValue::Float(-3.0), LaneValue::Int(-3)), Outcome::One);
    }

    #[test]
    fn test_int_against_extreme_floats() {
        assert_eq!(geq_lanes(LaneValue::Int(i64::MAX), LaneValue::Float(f64::INFINITY)), Outcome::Zero);
        assert_eq!(geq_lanes(LaneValue::Int(i64::MIN), LaneValue::Float(f64::NEG_INFINITY)), Outcome::One);
        assert_eq!(geq_lanes(LaneValue::Int(i64::MAX), LaneValue::Float(9.3e18)), Outcome::Zero);
        assert_eq!(geq_lanes(LaneValue::Float(-9.3e18), LaneValue::Int(i64::MIN)), Outcome::Zero);
        assert_eq!(geq_lanes(LaneValue::Int(i64::MIN), LaneValue::Float(-TWO_POW_63)), Outcome::One);
        assert_eq!(geq_lanes(LaneValue::Int(5), LaneValue::Float(f64::NAN)), Outcome::Zero);
        assert_eq!(geq_lanes(LaneValue::Float(f64::NAN), LaneValue::Int(5)), Outcome::Zero);
    }

    #[test]
    fn test_antisymmetry() {
        let pairs = [(1.0, 2.0), (2.0, 1.0), (3.0, 3.0), (-7.5, 0.25)];
        for (a, b) in pairs {
            let ab = geq_number(a, b);
            let ba = geq_number(b, a);
            if a == b {
                assert_eq!((ab, ba), (Outcome::One, Outcome::One));
            } else {
                assert_ne!(ab, ba);
            }
        }
    }
}
