// geq-core/src/dispatch.rs

//! Top-level entry points.
//!
//! [`geq`], [`geq_with`] and [`geq_with_raw`] accept any pair of operands and
//! pick the specialized routine from their shapes. [`geq_array`] is the
//! stricter array-first form: the first operand must be a plain sequence.

use log::{debug, warn};

use crate::error::GeqError;
use crate::matrix::Matrix;
use crate::operand::{Operand, Output};
use crate::ops::{accessor, array, element, matrix, typed_array};
use crate::options::Options;
use crate::typed::TypedSequence;
use crate::types::DType;
use crate::value::Value;

/// Options as supplied by the caller, before validation.
#[derive(Clone, Copy)]
enum Supplied<'a> {
    None,
    Typed(&'a Options),
    Raw(&'a Value),
}

impl Supplied<'_> {
    fn is_some(&self) -> bool {
        !matches!(self, Supplied::None)
    }

    fn resolve(self) -> Result<Options, GeqError> {
        match self {
            Supplied::None => Ok(Options::default()),
            Supplied::Typed(opts) => Ok(opts.clone()),
            Supplied::Raw(raw) => Options::validate(raw),
        }
    }
}

/// Element-wise `x >= y` with default options.
///
/// | `x`            | `y`                   | result                            |
/// |----------------|-----------------------|-----------------------------------|
/// | number/string  | number/string         | `Output::Scalar` of 1 or 0        |
/// | number/string  | other single value    | `Output::Scalar(NaN)`             |
/// | number/string  | sequence or matrix    | `x` broadcast, then compared      |
/// | plain sequence | scalar or sequence    | `Output::Plain` of 1, 0, NaN      |
/// | typed sequence | scalar or sequence    | `Output::Typed` with `U8` lanes   |
/// | matrix         | scalar or matrix      | `Output::Matrix` with `U8` lanes  |
/// | anything else  | anything              | `Output::Scalar(NaN)`             |
///
/// # Errors
/// - `MismatchedLength` / `MismatchedShape` when two collections do not line up.
/// - `InvalidArgument` when a matrix meets a sequence.
///
/// # Example
/// ```
/// use geq_core::{geq, numbers};
///
/// let out = geq(numbers(&[4.0, 5.0, 3.0, 6.0, 8.0]), 4.0).unwrap();
/// assert_eq!(out.to_f64_vec(), vec![1.0, 1.0, 0.0, 1.0, 1.0]);
///
/// let out = geq(4.0, numbers(&[3.0, 8.0])).unwrap();
/// assert_eq!(out.to_f64_vec(), vec![1.0, 0.0]);
/// ```
pub fn geq(x: impl Into<Operand>, y: impl Into<Operand>) -> Result<Output, GeqError> {
    dispatch(x.into(), y.into(), Supplied::None)
}

/// [`geq`] with explicit options.
///
/// # Errors
/// Same as [`geq`], plus `OptionsNotApplicable` when `x` is a scalar.
pub fn geq_with(x: impl Into<Operand>, y: impl Into<Operand>, options: &Options) -> Result<Output, GeqError> {
    dispatch(x.into(), y.into(), Supplied::Typed(options))
}

/// [`geq`] with an untyped options record, validated by
/// [`Options::validate`].
///
/// # Errors
/// Same as [`geq_with`], plus `InvalidOptions` / `InvalidOptionType` from
/// validation.
pub fn geq_with_raw(x: impl Into<Operand>, y: impl Into<Operand>, options: &Value) -> Result<Output, GeqError> {
    dispatch(x.into(), y.into(), Supplied::Raw(options))
}

fn dispatch(x: Operand, y: Operand, supplied: Supplied<'_>) -> Result<Output, GeqError> {
    let x = match x {
        Operand::Value(v) if v.as_scalar().is_some() => {
            if supplied.is_some() {
                return Err(GeqError::OptionsNotApplicable);
            }
            return scalar_first(v, y);
        }
        other => other,
    };

    let opts = supplied.resolve()?;
    match x {
        Operand::Matrix(m) => compare_matrix(m, &y, &opts),
        Operand::Typed(seq) => compare_typed(seq, &y, &opts),
        Operand::Plain(items) => compare_plain(items, &y, &opts),
        Operand::Value(v) => {
            debug!("geq: first operand is a {}, result is NaN", v.kind());
            Ok(Output::Scalar(f64::NAN))
        }
    }
}

/// Scalar `x` against anything: broadcast into `y`'s shape, or compare
/// directly when `y` is a scalar too.
fn scalar_first(x: Value, y: Operand) -> Result<Output, GeqError> {
    match y {
        Operand::Matrix(m) => {
            debug!("geq: broadcasting scalar into {:?} {:?} matrix", m.shape(), m.dtype());
            match x {
                Value::Number(n) => {
                    // F64 holds `n` as given; casting to `m`'s lane type would round it.
                    let broadcast = Matrix::full(m.shape(), DType::F64, n);
                    dispatch(Operand::Matrix(broadcast), Operand::Matrix(m), Supplied::None)
                }
                other => {
                    warn!("geq: a {} cannot fill a numeric matrix, every element is not comparable", other.kind());
                    Ok(Output::Matrix(Matrix::zeros(m.shape(), DType::U8)))
                }
            }
        }
        Operand::Plain(_) | Operand::Typed(_) => {
            let len = y.seq_len().unwrap_or(0);
            debug!("geq: broadcasting scalar into sequence of length {}", len);
            dispatch(Operand::Plain(vec![x; len]), y, Supplied::None)
        }
        Operand::Value(y) => {
            let outcome = element::geq_values(&x, &y);
            Ok(Output::Scalar(outcome.to_f64()))
        }
    }
}

fn compare_matrix(mut m: Matrix, y: &Operand, opts: &Options) -> Result<Output, GeqError> {
    if opts.accessor.is_some() {
        warn!("geq: accessor option is ignored for matrix input");
    }
    debug!("geq: matrix path, shape {:?}, copy {}", m.shape(), opts.copy);
    if opts.copy {
        let mut out = Matrix::zeros(m.shape(), DType::U8);
        matrix::apply(&mut out, &m, y)?;
        Ok(Output::Matrix(out))
    } else {
        matrix::apply_in_place(&mut m, y)?;
        Ok(Output::Matrix(m))
    }
}

fn compare_typed(mut seq: TypedSequence, y: &Operand, opts: &Options) -> Result<Output, GeqError> {
    if opts.accessor.is_some() {
        warn!("geq: accessor option is ignored for typed input");
    }
    debug!("geq: typed path, {} {:?} lanes, copy {}", seq.len(), seq.dtype(), opts.copy);
    if opts.copy {
        let mut out = TypedSequence::zeros(DType::U8, seq.len());
        typed_array::apply(&mut out, &seq, y)?;
        Ok(Output::Typed(out))
    } else {
        typed_array::apply_in_place(&mut seq, y)?;
        Ok(Output::Typed(seq))
    }
}

fn compare_plain(mut items: Vec<Value>, y: &Operand, opts: &Options) -> Result<Output, GeqError> {
    debug!(
        "geq: plain path, {} elements, accessor {}, copy {}",
        items.len(),
        opts.accessor.is_some(),
        opts.copy
    );
    match (&opts.accessor, opts.copy) {
        (Some(acc), true) => {
            let mut out = vec![Value::Null; items.len()];
            accessor::apply(&mut out, &items, y, acc)?;
            Ok(Output::Plain(out))
        }
        (Some(acc), false) => {
            accessor::apply_in_place(&mut items, y, acc)?;
            Ok(Output::Plain(items))
        }
        (None, true) => {
            let mut out = vec![Value::Null; items.len()];
            array::apply(&mut out, &items, y)?;
            Ok(Output::Plain(out))
        }
        (None, false) => {
            array::apply_in_place(&mut items, y)?;
            Ok(Output::Plain(items))
        }
    }
}

/// Array-first form: `arr` must be a plain sequence and `comparator` a plain
/// sequence, a number or a string.
///
/// # Errors
/// - `NotAnArray` if `arr` is not a plain sequence.
/// - `InvalidArgument` if `comparator` has any other shape.
/// - `InvalidOptions` / `InvalidOptionType` from option validation.
/// - `MismatchedLength` if `comparator` is a sequence of another length.
///
/// # Example
/// ```
/// use geq_core::{geq_array, strings};
///
/// let out = geq_array(strings(&["a", "aa", "aaa", "b"]), "aa", None).unwrap();
/// assert_eq!(out.to_f64_vec(), vec![0.0, 1.0, 1.0, 1.0]);
/// ```
pub fn geq_array(
    arr: impl Into<Operand>,
    comparator: impl Into<Operand>,
    options: Option<&Value>,
) -> Result<Output, GeqError> {
    const OP: &str = "geq_array";
    let items = match arr.into() {
        Operand::Plain(items) => items,
        other => {
            return Err(GeqError::NotAnArray {
                operation: OP.to_string(),
                found: other.kind().to_string(),
            })
        }
    };
    let comparator = comparator.into();
    if !(comparator.is_scalar() || matches!(comparator, Operand::Plain(_))) {
        return Err(GeqError::InvalidArgument {
            operation: OP.to_string(),
            message: format!(
                "comparison input must be a plain sequence, a number or a string, got a {}",
                comparator.kind()
            ),
        });
    }
    let opts = match options {
        Some(raw) => Options::validate(raw)?,
        None => Options::default(),
    };
    compare_plain(items, &comparator, &opts)
}

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod tests;
