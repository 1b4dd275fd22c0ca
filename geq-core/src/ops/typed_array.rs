// geq-core/src/ops/typed_array.rs

use log::trace;

use crate::error::GeqError;
use crate::operand::Operand;
use crate::outcome::{Outcome, OutputSink};
use crate::typed::TypedSequence;

use super::{check_len, Comparator};

const OP: &str = "geq_typed_array";

/// Computes the un-encoded result of `primary[i] >= comparator` for a typed
/// sequence.
///
/// This is the explicit form of the typed path: the caller sees
/// [`Outcome::NotComparable`] where the comparator element is not a number
/// (a string, null, record, ...), instead of whatever the output lane type
/// would turn that into.
///
/// # Errors
/// - `MismatchedLength` if a sequence comparator differs in length.
/// - `InvalidArgument` if `comparator` is a matrix.
pub fn compare(primary: &TypedSequence, comparator: &Operand) -> Result<Vec<Outcome>, GeqError> {
    let rhs = Comparator::resolve(OP, comparator, primary.len())?;
    Ok((0..primary.len())
        .map(|i| rhs.against_lane(i, primary.lane_at(i)))
        .collect())
}

/// Compares a typed sequence element-wise and writes into `out`.
///
/// `out` decides how a non-comparable index is stored: NaN in a plain
/// sequence or a float lane, `0` in an integer lane (the default `U8`
/// output of the dispatcher included).
///
/// # Errors
/// - `MismatchedLength` if `comparator` or `out` differ in length from
///   `primary`. Nothing is written in that case.
/// - `InvalidArgument` if `comparator` is a matrix.
///
/// # Example
/// ```
/// use geq_core::ops::typed_array;
/// use geq_core::{DType, Operand, TypedSequence};
///
/// let data = TypedSequence::from(vec![12.0f64, 6.0, 4.0, 3.0]);
/// let y = Operand::from(TypedSequence::from(vec![4.0f64, 9.0, 4.0, 5.0]));
/// let mut out = TypedSequence::zeros(DType::U8, data.len());
/// typed_array::apply(&mut out, &data, &y).unwrap();
/// assert_eq!(out, TypedSequence::U8(vec![1, 0, 1, 0]));
/// ```
pub fn apply<S>(out: &mut S, primary: &TypedSequence, comparator: &Operand) -> Result<(), GeqError>
where
    S: OutputSink + ?Sized,
{
    let rhs = Comparator::resolve(OP, comparator, primary.len())?;
    check_len(OP, primary.len(), out.sink_len())?;
    trace!(
        "{}: {} {:?} lanes against {}",
        OP,
        primary.len(),
        primary.dtype(),
        comparator.kind()
    );

    for i in 0..primary.len() {
        out.write(i, rhs.against_lane(i, primary.lane_at(i)));
    }
    Ok(())
}

/// Same as [`apply`], overwriting the lanes of `primary`. Results keep the
/// lane type of `primary`.
pub fn apply_in_place(primary: &mut TypedSequence, comparator: &Operand) -> Result<(), GeqError> {
    let rhs = Comparator::resolve(OP, comparator, primary.len())?;
    trace!("{}: {} {:?} lanes in place", OP, primary.len(), primary.dtype());

    for i in 0..primary.len() {
        let outcome = rhs.against_lane(i, primary.lane_at(i));
        primary.write(i, outcome);
    }
    Ok(())
}

#[cfg(test)]
#[path = "typed_array_test.rs"]
mod tests;
