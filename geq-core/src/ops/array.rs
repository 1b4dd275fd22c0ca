// geq-core/src/ops/array.rs

use log::trace;

use crate::error::GeqError;
use crate::operand::Operand;
use crate::outcome::OutputSink;
use crate::value::Value;

use super::{check_len, Comparator};

const OP: &str = "geq_array";

/// Compares a plain sequence element-wise (`primary[i] >= comparator`),
/// writing 1, 0 or the not-comparable sentinel into `out`.
///
/// `comparator` is a broadcast value or a sequence (plain or typed) of the
/// same length as `primary`. An index where either operand is not a number
/// or string, or where their kinds differ, is not comparable.
///
/// # Errors
/// - `MismatchedLength` if `comparator` or `out` differ in length from
///   `primary`. Nothing is written in that case.
/// - `InvalidArgument` if `comparator` is a matrix.
///
/// # Example
/// ```
/// use geq_core::ops::array;
/// use geq_core::{numbers, Operand, Value};
///
/// let data = numbers(&[4.0, 5.0, 3.0, 6.0, 8.0]);
/// let mut out = vec![Value::Null; data.len()];
/// array::apply(&mut out, &data, &Operand::from(4.0)).unwrap();
/// assert_eq!(out, numbers(&[1.0, 1.0, 0.0, 1.0, 1.0]));
/// ```
pub fn apply<S>(out: &mut S, primary: &[Value], comparator: &Operand) -> Result<(), GeqError>
where
    S: OutputSink + ?Sized,
{
    let rhs = Comparator::resolve(OP, comparator, primary.len())?;
    check_len(OP, primary.len(), out.sink_len())?;
    trace!("{}: {} elements against {}", OP, primary.len(), comparator.kind());

    for (i, x) in primary.iter().enumerate() {
        out.write(i, rhs.outcome(i, x));
    }
    Ok(())
}

/// Same as [`apply`], overwriting `primary` with its own results.
pub fn apply_in_place(primary: &mut [Value], comparator: &Operand) -> Result<(), GeqError> {
    let rhs = Comparator::resolve(OP, comparator, primary.len())?;
    trace!("{}: {} elements in place against {}", OP, primary.len(), comparator.kind());

    for (i, slot) in primary.iter_mut().enumerate() {
        let outcome = rhs.outcome(i, slot);
        *slot = outcome.to_value();
    }
    Ok(())
}

#[cfg(test)]
#[path = "array_test.rs"]
mod tests;
