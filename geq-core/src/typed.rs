// geq-core/src/typed.rs

use std::fmt::Debug;

use num_traits::{NumCast, One, ToPrimitive, Zero};

use crate::error::GeqError;
use crate::outcome::{Outcome, OutputSink};
use crate::types::DType;

/// A numeric lane type usable inside a [`TypedSequence`].
///
/// Bounds the primitive types (`i8` .. `f64`) that fixed-width buffers are
/// made of. Besides the arithmetic identities from `num-traits` each lane
/// states how it stores a comparison that could not be made.
pub trait Lane:
    NumCast // Includes ToPrimitive
    + Zero
    + One
    + PartialOrd
    + Debug
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Tag of this lane type.
    const DTYPE: DType;

    /// Stored for [`Outcome::NotComparable`]: NaN where
    /// [`DType::is_float`] holds, `0` for integer lanes.
    const NOT_COMPARABLE: Self;

    /// Saturating conversion, same as an `as` cast (NaN becomes `0` for
    /// integer lanes).
    fn from_f64(value: f64) -> Self;

    /// The lane as a comparison operand, without widening integers to `f64`.
    fn lane_value(self) -> LaneValue;

    #[inline]
    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    #[inline]
    fn encode(outcome: Outcome) -> Self {
        match outcome {
            Outcome::One => Self::one(),
            Outcome::Zero => Self::zero(),
            Outcome::NotComparable => Self::NOT_COMPARABLE,
        }
    }
}

/// A lane read for comparison. Every integer lane fits `i64` exactly, so
/// integers never go through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LaneValue {
    Int(i64),
    Float(f64),
}

macro_rules! int_lane {
    ($t:ty, $dtype:ident) => {
        impl Lane for $t {
            const DTYPE: DType = DType::$dtype;
            const NOT_COMPARABLE: Self = 0;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn lane_value(self) -> LaneValue {
                LaneValue::Int(self as i64)
            }
        }
    };
}

macro_rules! float_lane {
    ($t:ty, $dtype:ident) => {
        impl Lane for $t {
            const DTYPE: DType = DType::$dtype;
            const NOT_COMPARABLE: Self = <$t>::NAN;

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            #[inline]
            fn lane_value(self) -> LaneValue {
                LaneValue::Float(self as f64)
            }
        }
    };
}

int_lane!(i8, I8);
int_lane!(u8, U8);
int_lane!(i16, I16);
int_lane!(u16, U16);
int_lane!(i32, I32);
int_lane!(u32, U32);
int_lane!(i64, I64);
float_lane!(f32, F32);
float_lane!(f64, F64);

/// A fixed-width numeric buffer, one variant per [`DType`].
#[derive(Debug, Clone, PartialEq)]
pub enum TypedSequence {
    I8(Vec<i8>),
    U8(Vec<u8>),
    I16(Vec<i16>),
    U16(Vec<u16>),
    I32(Vec<i32>),
    U32(Vec<u32>),
    I64(Vec<i64>),
    F32(Vec<f32>),
    F64(Vec<f64>),
}

/// Runs `$body` with `$buf` bound to the inner `Vec` of whatever lane type
/// `$seq` holds.
macro_rules! with_lanes {
    ($seq:expr, $buf:ident => $body:expr) => {
        match $seq {
            TypedSequence::I8($buf) => $body,
            TypedSequence::U8($buf) => $body,
            TypedSequence::I16($buf) => $body,
            TypedSequence::U16($buf) => $body,
            TypedSequence::I32($buf) => $body,
            TypedSequence::U32($buf) => $body,
            TypedSequence::I64($buf) => $body,
            TypedSequence::F32($buf) => $body,
            TypedSequence::F64($buf) => $body,
        }
    };
}

fn filled<T: Lane>(len: usize, value: f64) -> Vec<T> {
    vec![T::from_f64(value); len]
}

impl TypedSequence {
    /// Creates a sequence of `len` lanes of type `dtype`, all set to `value`
    /// (cast with [`Lane::from_f64`]).
    pub fn full(dtype: DType, len: usize, value: f64) -> Self {
        match dtype {
            DType::I8 => TypedSequence::I8(filled(len, value)),
            DType::U8 => TypedSequence::U8(filled(len, value)),
            DType::I16 => TypedSequence::I16(filled(len, value)),
            DType::U16 => TypedSequence::U16(filled(len, value)),
            DType::I32 => TypedSequence::I32(filled(len, value)),
            DType::U32 => TypedSequence::U32(filled(len, value)),
            DType::I64 => TypedSequence::I64(filled(len, value)),
            DType::F32 => TypedSequence::F32(filled(len, value)),
            DType::F64 => TypedSequence::F64(filled(len, value)),
        }
    }

    pub fn zeros(dtype: DType, len: usize) -> Self {
        Self::full(dtype, len, 0.0)
    }

    pub fn dtype(&self) -> DType {
        match self {
            TypedSequence::I8(_) => DType::I8,
            TypedSequence::U8(_) => DType::U8,
            TypedSequence::I16(_) => DType::I16,
            TypedSequence::U16(_) => DType::U16,
            TypedSequence::I32(_) => DType::I32,
            TypedSequence::U32(_) => DType::U32,
            TypedSequence::I64(_) => DType::I64,
            TypedSequence::F32(_) => DType::F32,
            TypedSequence::F64(_) => DType::F64,
        }
    }

    pub fn len(&self) -> usize {
        with_lanes!(self, buf => buf.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lane `index` widened to `f64`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<f64> {
        with_lanes!(self, buf => buf.get(index).map(|v| v.as_f64()))
    }

    /// Stores `value` into lane `index`, cast to the lane type.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), GeqError> {
        let len = self.len();
        with_lanes!(self, buf => match buf.get_mut(index) {
            Some(slot) => {
                *slot = Lane::from_f64(value);
                Ok(())
            }
            None => Err(GeqError::IndexOutOfBounds {
                index: vec![index],
                shape: vec![len],
            }),
        })
    }

    /// Unchecked read of lane `index` widened to `f64`.
    #[inline]
    pub(crate) fn value_at(&self, index: usize) -> f64 {
        with_lanes!(self, buf => buf[index].as_f64())
    }

    /// Unchecked read of lane `index` at full precision.
    #[inline]
    pub(crate) fn lane_at(&self, index: usize) -> LaneValue {
        with_lanes!(self, buf => buf[index].lane_value())
    }

    /// All lanes widened to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        with_lanes!(self, buf => buf.iter().map(|v| v.as_f64()).collect())
    }

    /// Address of the backing allocation, for identity checks.
    pub fn as_ptr(&self) -> *const u8 {
        with_lanes!(self, buf => buf.as_ptr() as *const u8)
    }
}

impl OutputSink for TypedSequence {
    fn sink_len(&self) -> usize {
        self.len()
    }

    fn write(&mut self, index: usize, outcome: Outcome) {
        with_lanes!(self, buf => buf[index] = Lane::encode(outcome))
    }
}

macro_rules! from_vec {
    ($t:ty, $variant:ident) => {
        impl From<Vec<$t>> for TypedSequence {
            fn from(data: Vec<$t>) -> Self {
                TypedSequence::$variant(data)
            }
        }
    };
}

from_vec!(i8, I8);
from_vec!(u8, U8);
from_vec!(i16, I16);
from_vec!(u16, U16);
from_vec!(i32, I32);
from_vec!(u32, U32);
from_vec!(i64, I64);
from_vec!(f32, F32);
from_vec!(f64, F64);

#[cfg(test)]
#[path = "typed_test.rs"]
mod tests;
