use crate::value::Value;

/// Result of comparing one pair of elements.
///
/// Comparisons never fail element-wise. A pair that cannot be ordered is
/// reported as `NotComparable` and each output container decides how to
/// store it (see [`OutputSink`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// `x < y`.
    Zero,
    /// `x >= y`.
    One,
    /// At least one operand is not a number or string, or the kinds differ.
    NotComparable,
}

impl Outcome {
    #[inline]
    pub fn from_bool(geq: bool) -> Self {
        if geq {
            Outcome::One
        } else {
            Outcome::Zero
        }
    }

    /// `1.0`, `0.0` or `NaN`.
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Outcome::One => 1.0,
            Outcome::Zero => 0.0,
            Outcome::NotComparable => f64::NAN,
        }
    }

    /// Plain-sequence encoding: always a `Value::Number` of 1, 0 or NaN.
    #[inline]
    pub fn to_value(self) -> Value {
        Value::Number(self.to_f64())
    }

    pub fn is_comparable(&self) -> bool {
        !matches!(self, Outcome::NotComparable)
    }
}

/// A container that comparison results can be written into.
///
/// Each implementation owns the encoding of [`Outcome::NotComparable`] for
/// its element type: plain sequences store NaN, float lanes store NaN and
/// integer lanes store `0`.
pub trait OutputSink {
    /// Number of writable slots.
    fn sink_len(&self) -> usize;

    /// Stores `outcome` at flat position `index`.
    ///
    /// Callers check `sink_len` first; an out-of-range index panics.
    fn write(&mut self, index: usize, outcome: Outcome);
}

impl OutputSink for [Value] {
    fn sink_len(&self) -> usize {
        self.len()
    }

    fn write(&mut self, index: usize, outcome: Outcome) {
        self[index] = outcome.to_value();
    }
}

impl OutputSink for Vec<Value> {
    fn sink_len(&self) -> usize {
        self.len()
    }

    fn write(&mut self, index: usize, outcome: Outcome) {
        self[index] = outcome.to_value();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_f64() {
        assert_eq!(Outcome::One.to_f64(), 1.0);
        assert_eq!(Outcome::Zero.to_f64(), 0.0);
        assert!(Outcome::NotComparable.to_f64().is_nan());
    }

    #[test]
    fn test_plain_sink_stores_nan_for_not_comparable() {
        let mut out = vec![Value::Null; 3];
        out.write(0, Outcome::One);
        out.write(1, Outcome::Zero);
        out.write(2, Outcome::NotComparable);
        assert_eq!(out[0], Value::Number(1.0));
        assert_eq!(out[1], Value::Number(0.0));
        assert!(out[2].as_f64().map_or(false, f64::is_nan));
    }
}
