use crate::types::DType;
use thiserror::Error;

/// Custom error type for the geq comparison routines.
///
/// Only structural problems are errors. A single element that cannot be
/// compared is never reported here; it becomes a sentinel in the output.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum GeqError {
    #[error("Invalid argument for operation {operation}: {message}")]
    InvalidArgument { operation: String, message: String },

    #[error("Operation {operation} requires a plain sequence, got {found}")]
    NotAnArray { operation: String, found: String },

    #[error("Options argument must be a record, got {found}")]
    InvalidOptions { found: String },

    #[error("Invalid option `{option}`: expected {expected}, got {found}")]
    InvalidOptionType {
        option: String,
        expected: String,
        found: String,
    },

    #[error("Length mismatch during operation {operation}: expected {expected}, got {actual}")]
    MismatchedLength {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Shape mismatch during operation {operation}: expected {expected:?}, got {actual:?}")]
    MismatchedShape {
        expected: Vec<usize>,
        actual: Vec<usize>,
        operation: String,
    },

    #[error("Options are not applicable when the first operand is a scalar")]
    OptionsNotApplicable,

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },

    #[error("Matrix creation error: {dtype:?} buffer of length {data_len} does not match shape {shape:?}")]
    MatrixCreation {
        data_len: usize,
        shape: Vec<usize>,
        dtype: DType,
    },
}

impl GeqError {
    pub(crate) fn length(operation: &str, expected: usize, actual: usize) -> Self {
        GeqError::MismatchedLength {
            expected,
            actual,
            operation: operation.to_string(),
        }
    }

    pub(crate) fn shape(operation: &str, expected: [usize; 2], actual: [usize; 2]) -> Self {
        GeqError::MismatchedShape {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
            operation: operation.to_string(),
        }
    }
}
