use crate::matrix::Matrix;
use crate::typed::TypedSequence;
use crate::value::Value;

/// An argument of a comparison, classified once at the API boundary.
///
/// The dispatcher matches on this tag instead of probing capabilities at
/// every branch.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// Anything that is not a collection: numbers and strings (the scalars)
    /// but also booleans, null, records and functions.
    Value(Value),
    /// Heterogeneous sequence.
    Plain(Vec<Value>),
    /// Fixed-width numeric buffer.
    Typed(TypedSequence),
    Matrix(Matrix),
}

impl Operand {
    /// Classifies a dynamic value: lists become plain sequences, everything
    /// else stays a single value.
    pub fn classify(value: Value) -> Self {
        match value {
            Value::List(items) => Operand::Plain(items),
            other => Operand::Value(other),
        }
    }

    /// A number or a string.
    pub fn is_scalar(&self) -> bool {
        matches!(self, Operand::Value(Value::Number(_)) | Operand::Value(Value::Str(_)))
    }

    /// Length of a sequence operand, `None` for values and matrices.
    pub fn seq_len(&self) -> Option<usize> {
        match self {
            Operand::Plain(items) => Some(items.len()),
            Operand::Typed(seq) => Some(seq.len()),
            _ => None,
        }
    }

    /// Short description used in error messages and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Value(v) => v.kind(),
            Operand::Plain(_) => "plain sequence",
            Operand::Typed(_) => "typed sequence",
            Operand::Matrix(_) => "matrix",
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Operand::classify(value)
    }
}

impl From<f64> for Operand {
    fn from(n: f64) -> Self {
        Operand::Value(Value::Number(n))
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::Value(Value::from(s))
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::Value(Value::Str(s))
    }
}

impl From<Vec<Value>> for Operand {
    fn from(items: Vec<Value>) -> Self {
        Operand::Plain(items)
    }
}

impl From<TypedSequence> for Operand {
    fn from(seq: TypedSequence) -> Self {
        Operand::Typed(seq)
    }
}

impl From<Matrix> for Operand {
    fn from(m: Matrix) -> Self {
        Operand::Matrix(m)
    }
}

/// Result of a comparison. The container kind follows the primary operand.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// `1.0`, `0.0` or `NaN` from the scalar calling forms.
    Scalar(f64),
    Plain(Vec<Value>),
    Typed(TypedSequence),
    Matrix(Matrix),
}

impl Output {
    pub fn scalar(&self) -> Option<f64> {
        match self {
            Output::Scalar(x) => Some(*x),
            _ => None,
        }
    }

    pub fn into_plain(self) -> Option<Vec<Value>> {
        match self {
            Output::Plain(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_typed(self) -> Option<TypedSequence> {
        match self {
            Output::Typed(seq) => Some(seq),
            _ => None,
        }
    }

    pub fn into_matrix(self) -> Option<Matrix> {
        match self {
            Output::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Flattens the result to `f64`s (row-major for matrices). Non-numeric
    /// plain elements read as NaN.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        match self {
            Output::Scalar(x) => vec![*x],
            Output::Plain(items) => items.iter().map(|v| v.as_f64().unwrap_or(f64::NAN)).collect(),
            Output::Typed(seq) => seq.to_f64_vec(),
            Output::Matrix(m) => m.data().to_f64_vec(),
        }
    }
}
