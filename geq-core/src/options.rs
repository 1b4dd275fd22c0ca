use std::fmt;
use std::sync::Arc;

use log::trace;

use crate::error::GeqError;
use crate::value::{Side, Value};

/// Signature of an accessor: `(element, index, side) -> comparable value`.
pub type AccessorFn = dyn Fn(&Value, usize, Side) -> Value + Send + Sync;

/// How an accessor treats the elements of a plain comparator sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComparatorExtraction {
    /// Decide from the comparator's first element: a record means every
    /// comparator element goes through the accessor, anything else means the
    /// elements are used as they are.
    #[default]
    Infer,
    /// Always extract comparator elements with `Side::Comparator`.
    Always,
    /// Never extract; comparator elements are compared directly.
    Never,
}

/// Caller-supplied extraction function plus its declared comparator mode.
#[derive(Clone)]
pub struct Accessor {
    func: Arc<AccessorFn>,
    extraction: ComparatorExtraction,
}

impl Accessor {
    /// Accessor with [`ComparatorExtraction::Infer`].
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Value, usize, Side) -> Value + Send + Sync + 'static,
    {
        Accessor {
            func: Arc::new(func),
            extraction: ComparatorExtraction::Infer,
        }
    }

    /// Accessor applied to the primary sequence only.
    pub fn primary_only<F>(func: F) -> Self
    where
        F: Fn(&Value, usize, Side) -> Value + Send + Sync + 'static,
    {
        Self::new(func).with_extraction(ComparatorExtraction::Never)
    }

    /// Accessor applied to both the primary and the comparator sequence.
    pub fn both_sides<F>(func: F) -> Self
    where
        F: Fn(&Value, usize, Side) -> Value + Send + Sync + 'static,
    {
        Self::new(func).with_extraction(ComparatorExtraction::Always)
    }

    pub fn with_extraction(mut self, extraction: ComparatorExtraction) -> Self {
        self.extraction = extraction;
        self
    }

    pub fn extraction(&self) -> ComparatorExtraction {
        self.extraction
    }

    #[inline]
    pub fn call(&self, element: &Value, index: usize, side: Side) -> Value {
        (self.func)(element, index, side)
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("extraction", &self.extraction)
            .finish_non_exhaustive()
    }
}

// Two accessors are equal only if they share the same function allocation.
impl PartialEq for Accessor {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func) && self.extraction == other.extraction
    }
}

/// Per-call configuration of a comparison.
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// `true` (default): results go into a freshly allocated container.
    /// `false`: the input container is overwritten and returned.
    pub copy: bool,
    /// Extraction function for plain sequences of structured elements.
    pub accessor: Option<Accessor>,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            copy: true,
            accessor: None,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_copy(mut self, copy: bool) -> Self {
        self.copy = copy;
        self
    }

    pub fn with_accessor(mut self, accessor: Accessor) -> Self {
        self.accessor = Some(accessor);
        self
    }

    /// Validates an untyped options record.
    ///
    /// Recognized keys are `copy` (boolean) and `accessor` (function). Missing
    /// keys keep their defaults and unknown keys are ignored.
    ///
    /// # Errors
    /// - `InvalidOptions` if `raw` is not a record.
    /// - `InvalidOptionType` if `copy` is not a boolean or `accessor` is not a
    ///   function.
    pub fn validate(raw: &Value) -> Result<Self, GeqError> {
        let fields = match raw {
            Value::Record(fields) => fields,
            other => {
                return Err(GeqError::InvalidOptions {
                    found: other.kind().to_string(),
                })
            }
        };

        let mut opts = Options::default();
        for (key, value) in fields {
            match (key.as_str(), value) {
                ("copy", Value::Bool(copy)) => opts.copy = *copy,
                ("copy", other) => return Err(invalid_type("copy", "boolean", other)),
                ("accessor", Value::Func(accessor)) => opts.accessor = Some(accessor.clone()),
                ("accessor", other) => return Err(invalid_type("accessor", "function", other)),
                (unknown, _) => trace!("Options::validate: ignoring unrecognized option `{}`", unknown),
            }
        }
        Ok(opts)
    }
}

fn invalid_type(option: &str, expected: &str, found: &Value) -> GeqError {
    GeqError::InvalidOptionType {
        option: option.to_string(),
        expected: expected.to_string(),
        found: found.kind().to_string(),
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
