use super::{apply, apply_in_place, compare};
use crate::error::GeqError;
use crate::matrix::Matrix;
use crate::operand::Operand;
use crate::outcome::Outcome;
use crate::test_utils::{assert_f64_slice_eq, assert_plain_eq};
use crate::typed::TypedSequence;
use crate::types::DType;
use crate::value::{numbers, Value};

const NAN: f64 = f64::NAN;

#[test]
fn test_two_typed_arrays() {
    let data = TypedSequence::from(vec![12.0f64, 6.0, 4.0, 3.0]);
    let y = Operand::from(TypedSequence::from(vec![4.0f64, 9.0, 4.0, 5.0]));
    let mut out = TypedSequence::zeros(DType::U8, data.len());
    apply(&mut out, &data, &y).unwrap();
    assert_eq!(out, TypedSequence::U8(vec![1, 0, 1, 0]));
}

#[test]
fn test_against_scalar() {
    let data = TypedSequence::from(vec![2i32, 4, 6, 8, 10]);
    let mut out = TypedSequence::zeros(DType::I32, data.len());
    apply(&mut out, &data, &Operand::from(6.0)).unwrap();
    assert_eq!(out, TypedSequence::I32(vec![0, 0, 1, 1, 1]));
}

#[test]
fn test_mixed_lane_types() {
    let data = TypedSequence::from(vec![-1i8, 0, 1]);
    let y = Operand::from(TypedSequence::from(vec![0.5f32, 0.0, 0.5]));
    assert_eq!(
        compare(&data, &y).unwrap(),
        vec![Outcome::Zero, Outcome::One, Outcome::One]
    );
}

#[test]
fn test_length_mismatch() {
    let data = TypedSequence::from(vec![1i8, 2]);
    let mut out = vec![Value::Null; 2];
    assert!(matches!(
        apply(&mut out, &data, &Operand::from(TypedSequence::from(vec![1i8, 2, 3]))),
        Err(GeqError::MismatchedLength { expected: 2, actual: 3, .. })
    ));
    assert!(matches!(
        apply(&mut out, &data, &Operand::from(numbers(&[1.0, 2.0, 3.0]))),
        Err(GeqError::MismatchedLength { .. })
    ));
}

#[test]
fn test_non_numeric_comparator_into_plain_output() {
    let data = TypedSequence::from(vec![1.0f64, 2.0, 3.0, 4.0]);
    let mut out = vec![Value::Null; data.len()];
    apply(&mut out, &data, &Operand::from(Value::Null)).unwrap();
    assert_plain_eq(&out, &[NAN, NAN, NAN, NAN]);

    let y = Operand::from(vec![Value::from(2.0), Value::from(2.0), Value::from(2.0), Value::Null]);
    apply(&mut out, &data, &y).unwrap();
    assert_plain_eq(&out, &[0.0, 1.0, 1.0, NAN]);
}

#[test]
fn test_non_numeric_comparator_into_u8_output_is_zero() {
    let data = TypedSequence::from(vec![1.0f64, 2.0, 3.0, 4.0]);
    let y = Operand::from(vec![Value::from(2.0), Value::from(2.0), Value::from(2.0), Value::Null]);
    let mut out = TypedSequence::zeros(DType::U8, data.len());
    apply(&mut out, &data, &y).unwrap();
    assert_eq!(out, TypedSequence::U8(vec![0, 1, 1, 0]));
    assert_eq!(
        compare(&data, &y).unwrap()[3],
        Outcome::NotComparable
    );
}

#[test]
fn test_non_numeric_comparator_into_float_output_is_nan() {
    let data = TypedSequence::from(vec![1.0f64, 2.0]);
    let mut out = TypedSequence::zeros(DType::F32, 2);
    apply(&mut out, &data, &Operand::from("a")).unwrap();
    assert_f64_slice_eq(&out.to_f64_vec(), &[NAN, NAN]);
}

#[test]
fn test_empty() {
    let data = TypedSequence::zeros(DType::I8, 0);
    let mut out = TypedSequence::zeros(DType::I8, 0);
    apply(&mut out, &data, &Operand::from(TypedSequence::zeros(DType::I8, 0))).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_in_place_keeps_lane_type() {
    let mut data = TypedSequence::from(vec![1.0f64, 5.0, 3.0]);
    let ptr = data.as_ptr();
    apply_in_place(&mut data, &Operand::from(vec![Value::from(2.0), Value::Null, Value::from(3.0)])).unwrap();
    assert_eq!(data.dtype(), DType::F64);
    assert_f64_slice_eq(&data.to_f64_vec(), &[0.0, NAN, 1.0]);
    assert_eq!(data.as_ptr(), ptr);
}

#[test]
fn test_matrix_comparator_rejected() {
    let data = TypedSequence::from(vec![1u8]);
    let m = Operand::from(Matrix::zeros([1, 1], DType::U8));
    assert!(matches!(compare(&data, &m), Err(GeqError::InvalidArgument { .. })));
}

#[test]
fn test_i64_lanes_past_f64_precision() {
    let big = 1i64 << 53;
    let data = TypedSequence::from(vec![big, big + 1, i64::MAX]);
    let y = Operand::from(TypedSequence::from(vec![big + 1, big, i64::MAX - 1]));
    let mut out = TypedSequence::zeros(DType::U8, 3);
    apply(&mut out, &data, &y).unwrap();
    assert_eq!(out, TypedSequence::U8(vec![0, 1, 1]));
}

#[test]
fn test_integer_lanes_against_fractional_scalar() {
    let data = TypedSequence::from(vec![0i32, -1, 3]);
    assert_eq!(
        compare(&data, &Operand::from(-0.5)).unwrap(),
        vec![Outcome::One, Outcome::Zero, Outcome::One]
    );
    let data = TypedSequence::from(vec![0u8, 1]);
    assert_eq!(
        compare(&data, &Operand::from(0.5)).unwrap(),
        vec![Outcome::Zero, Outcome::One]
    );
}

#[test]
fn test_plain_primary_against_i64_comparator() {
    let big = 1i64 << 53;
    let xs = vec![Value::from(big as f64)];
    let y = Operand::from(TypedSequence::from(vec![big + 1]));
    let mut out = vec![Value::Null; 1];
    crate::ops::array::apply(&mut out, &xs, &y).unwrap();
    assert_plain_eq(&out, &[0.0]);
}
