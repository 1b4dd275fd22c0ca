// geq-core/src/matrix.rs

use crate::error::GeqError;
use crate::outcome::{Outcome, OutputSink};
use crate::typed::{LaneValue, TypedSequence};
use crate::types::DType;
use crate::utils::{calculate_strides, numel};

/// A two-dimensional, fixed-shape numeric matrix.
///
/// The elements live in a flat [`TypedSequence`] in row-major order; `get`
/// and `set` layer `(row, col)` addressing on top of it using the strides
/// computed at construction. The shape never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Flat backing buffer, `rows * cols` lanes.
    data: TypedSequence,
    /// `[rows, cols]`.
    shape: [usize; 2],
    /// Row-major strides for `shape`.
    strides: [usize; 2],
}

impl Matrix {
    /// Wraps `data` as a matrix of the given shape.
    ///
    /// # Errors
    /// Returns `GeqError::MatrixCreation` if the buffer length does not match
    /// `rows * cols`.
    pub fn new(data: TypedSequence, shape: [usize; 2]) -> Result<Self, GeqError> {
        let expected = numel(&shape);
        if data.len() != expected {
            return Err(GeqError::MatrixCreation {
                data_len: data.len(),
                shape: shape.to_vec(),
                dtype: data.dtype(),
            });
        }
        let strides = calculate_strides(&shape);
        Ok(Matrix {
            data,
            shape,
            strides: [strides[0], strides[1]],
        })
    }

    /// Creates a matrix of the given shape and lane type with every element
    /// set to `value`.
    pub fn full(shape: [usize; 2], dtype: DType, value: f64) -> Self {
        let strides = calculate_strides(&shape);
        Matrix {
            data: TypedSequence::full(dtype, numel(&shape), value),
            shape,
            strides: [strides[0], strides[1]],
        }
    }

    pub fn zeros(shape: [usize; 2], dtype: DType) -> Self {
        Self::full(shape, dtype, 0.0)
    }

    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    pub fn data(&self) -> &TypedSequence {
        &self.data
    }

    pub fn into_data(self) -> TypedSequence {
        self.data
    }

    fn check_index(&self, row: usize, col: usize) -> Result<usize, GeqError> {
        if row >= self.shape[0] || col >= self.shape[1] {
            return Err(GeqError::IndexOutOfBounds {
                index: vec![row, col],
                shape: self.shape.to_vec(),
            });
        }
        Ok(self.flat_index(row, col))
    }

    #[inline]
    fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.strides[0] + col * self.strides[1]
    }

    /// Element at `(row, col)` widened to `f64`.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, GeqError> {
        let idx = self.check_index(row, col)?;
        Ok(self.data.value_at(idx))
    }

    /// Stores `value` at `(row, col)`, cast to the lane type.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), GeqError> {
        let idx = self.check_index(row, col)?;
        self.data.set(idx, value)
    }

    #[inline]
    pub(crate) fn lane_at(&self, row: usize, col: usize) -> LaneValue {
        self.data.lane_at(self.flat_index(row, col))
    }

    #[inline]
    pub(crate) fn write_at(&mut self, row: usize, col: usize, outcome: Outcome) {
        let idx = self.flat_index(row, col);
        self.data.write(idx, outcome);
    }
}

impl OutputSink for Matrix {
    fn sink_len(&self) -> usize {
        self.data.len()
    }

    fn write(&mut self, index: usize, outcome: Outcome) {
        self.data.write(index, outcome);
    }
}
