// geq-core/src/ops/matrix.rs

use log::trace;

use crate::error::GeqError;
use crate::matrix::Matrix;
use crate::operand::Operand;
use crate::outcome::OutputSink;
use crate::value::Value;

use super::element::{geq_lane_value, geq_lanes};

const OP: &str = "geq_matrix";

/// Comparator side of the matrix routine.
enum Rhs<'a> {
    Matrix(&'a Matrix),
    Value(&'a Value),
}

fn resolve<'a>(primary: &Matrix, comparator: &'a Operand) -> Result<Rhs<'a>, GeqError> {
    match comparator {
        Operand::Matrix(m) => {
            if m.shape() != primary.shape() {
                return Err(GeqError::shape(OP, primary.shape(), m.shape()));
            }
            Ok(Rhs::Matrix(m))
        }
        Operand::Value(v) => Ok(Rhs::Value(v)),
        other => Err(GeqError::InvalidArgument {
            operation: OP.to_string(),
            message: format!("a matrix can only be compared to a matrix or a scalar, got a {}", other.kind()),
        }),
    }
}

/// Compares a matrix element-wise against a same-shaped matrix or a scalar,
/// writing into `out`.
///
/// Against a matrix every `(row, col)` pair is compared through 2-D
/// addressing. Against a scalar the flat backing buffer is walked directly.
/// A non-numeric scalar makes every element not comparable, stored per the
/// lane type of `out`.
///
/// # Errors
/// - `MismatchedShape` if `comparator` or `out` have a different shape.
/// - `InvalidArgument` if `comparator` is a sequence.
///
/// # Example
/// ```
/// use geq_core::ops::matrix;
/// use geq_core::{DType, Matrix, Operand, TypedSequence};
///
/// let x = Matrix::new(TypedSequence::from(vec![1.0f64, 2.0, 3.0, 4.0]), [2, 2]).unwrap();
/// let mut out = Matrix::zeros([2, 2], DType::U8);
/// matrix::apply(&mut out, &x, &Operand::from(2.0)).unwrap();
/// assert_eq!(out.data().to_f64_vec(), vec![0.0, 1.0, 1.0, 1.0]);
/// ```
pub fn apply(out: &mut Matrix, primary: &Matrix, comparator: &Operand) -> Result<(), GeqError> {
    let rhs = resolve(primary, comparator)?;
    if out.shape() != primary.shape() {
        return Err(GeqError::shape(OP, primary.shape(), out.shape()));
    }
    trace!("{}: {:?} matrix against {}", OP, primary.shape(), comparator.kind());

    match rhs {
        Rhs::Matrix(y) => {
            for r in 0..primary.rows() {
                for c in 0..primary.cols() {
                    out.write_at(r, c, geq_lanes(primary.lane_at(r, c), y.lane_at(r, c)));
                }
            }
        }
        Rhs::Value(y) => {
            let data = primary.data();
            for i in 0..data.len() {
                out.write(i, geq_lane_value(data.lane_at(i), y));
            }
        }
    }
    Ok(())
}

/// Same as [`apply`], overwriting `primary`. Results keep its lane type.
pub fn apply_in_place(primary: &mut Matrix, comparator: &Operand) -> Result<(), GeqError> {
    let rhs = resolve(primary, comparator)?;
    trace!("{}: {:?} matrix in place", OP, primary.shape());

    match rhs {
        Rhs::Matrix(y) => {
            for r in 0..primary.rows() {
                for c in 0..primary.cols() {
                    let outcome = geq_lanes(primary.lane_at(r, c), y.lane_at(r, c));
                    primary.write_at(r, c, outcome);
                }
            }
        }
        Rhs::Value(y) => {
            for i in 0..primary.len() {
                let outcome = geq_lane_value(primary.data().lane_at(i), y);
                primary.write(i, outcome);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "matrix_test.rs"]
mod tests;
