//! Element-wise "greater than or equal" over scalars, plain sequences,
//! typed numeric sequences and 2-D matrices.
//!
//! Results are `1` where `x >= y` holds, `0` where it does not, and a
//! "not comparable" marker where the pair cannot be compared (NaN in plain
//! and float outputs, `0` in integer outputs).

pub mod dispatch;
pub mod error;
pub mod matrix;
pub mod operand;
pub mod ops;
pub mod options;
pub mod outcome;
pub mod typed;
pub mod types;
pub mod utils;
pub mod value;

#[cfg(test)]
mod test_utils;

// Flat re-exports for the common entry points
pub use dispatch::{geq, geq_array, geq_with, geq_with_raw};
pub use error::GeqError;
pub use matrix::Matrix;
pub use operand::{Operand, Output};
pub use options::{Accessor, ComparatorExtraction, Options};
pub use outcome::{Outcome, OutputSink};
pub use typed::{Lane, TypedSequence};
pub use types::DType;
pub use value::{numbers, strings, Scalar, Side, Value};

// Re-export traits required by `Lane`
pub use num_traits;
