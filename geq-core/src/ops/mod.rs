//! # Comparison Routines (`ops`)
//!
//! The specialized element-wise `>=` routines the dispatcher delegates to.
//!
//! ## Structure:
//!
//! - [`element`]: scalar-against-scalar comparison, the kernel every other routine uses.
//! - [`array`]: plain sequence against a scalar or an equal-length sequence.
//! - [`accessor`]: like `array`, with values extracted through an [`Accessor`](crate::options::Accessor).
//! - [`typed_array`]: fixed-width numeric buffer against a scalar or sequence.
//! - [`matrix`]: matrix against a same-shaped matrix or a scalar.
//!
//! Each routine comes in two forms: `apply` writes into a separate output
//! container (any [`OutputSink`](crate::outcome::OutputSink)), `apply_in_place`
//! overwrites the primary input. Length and shape checks always run before
//! the first element is written.

pub mod accessor;
pub mod array;
pub mod element;
pub mod matrix;
pub mod typed_array;

use crate::error::GeqError;
use crate::operand::Operand;
use crate::outcome::Outcome;
use crate::typed::{LaneValue, TypedSequence};
use crate::value::{Scalar, Value};

/// Comparator side of a sequence routine, resolved and length-checked once.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Comparator<'a> {
    /// Broadcast value. Not necessarily comparable: a non-scalar value makes
    /// every element `NotComparable`.
    Value(&'a Value),
    Plain(&'a [Value]),
    Typed(&'a TypedSequence),
}

impl<'a> Comparator<'a> {
    /// Resolves `comparator` against a primary of length `len`.
    ///
    /// # Errors
    /// - `MismatchedLength` if a sequence comparator has a different length.
    /// - `InvalidArgument` for a matrix comparator.
    pub(crate) fn resolve(operation: &str, comparator: &'a Operand, len: usize) -> Result<Self, GeqError> {
        match comparator {
            Operand::Value(v) => Ok(Comparator::Value(v)),
            Operand::Plain(items) => {
                check_len(operation, len, items.len())?;
                Ok(Comparator::Plain(items))
            }
            Operand::Typed(seq) => {
                check_len(operation, len, seq.len())?;
                Ok(Comparator::Typed(seq))
            }
            Operand::Matrix(_) => Err(GeqError::InvalidArgument {
                operation: operation.to_string(),
                message: "a matrix comparator requires a matrix as the compared operand".to_string(),
            }),
        }
    }

    /// Compares the comparable primary value `x` at index `i`.
    #[inline]
    pub(crate) fn against(&self, i: usize, x: Scalar<'_>) -> Outcome {
        match self {
            Comparator::Value(y) => match y.as_scalar() {
                Some(y) => element::geq(x, y),
                None => Outcome::NotComparable,
            },
            Comparator::Plain(ys) => match ys[i].as_scalar() {
                Some(y) => element::geq(x, y),
                None => Outcome::NotComparable,
            },
            Comparator::Typed(ys) => match x {
                Scalar::Number(a) => element::geq_lanes(LaneValue::Float(a), ys.lane_at(i)),
                Scalar::Str(_) => Outcome::NotComparable,
            },
        }
    }

    /// Compares the typed primary lane `x` at index `i`.
    #[inline]
    pub(crate) fn against_lane(&self, i: usize, x: LaneValue) -> Outcome {
        match self {
            Comparator::Value(y) => element::geq_lane_value(x, y),
            Comparator::Plain(ys) => element::geq_lane_value(x, &ys[i]),
            Comparator::Typed(ys) => element::geq_lanes(x, ys.lane_at(i)),
        }
    }

    /// Screens the primary value `x` at index `i` and compares it.
    #[inline]
    pub(crate) fn outcome(&self, i: usize, x: &Value) -> Outcome {
        match x.as_scalar() {
            Some(x) => self.against(i, x),
            None => Outcome::NotComparable,
        }
    }
}

/// Fails with `MismatchedLength` unless `actual == expected`.
pub(crate) fn check_len(operation: &str, expected: usize, actual: usize) -> Result<(), GeqError> {
    if expected != actual {
        return Err(GeqError::length(operation, expected, actual));
    }
    Ok(())
}
