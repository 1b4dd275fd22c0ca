/// Lane type tags for fixed-width numeric buffers.
///
/// Every [`TypedSequence`](crate::typed::TypedSequence) and therefore every
/// [`Matrix`](crate::matrix::Matrix) carries exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DType {
    /// 8-bit signed integer lanes.
    I8,
    /// 8-bit unsigned integer lanes. Default output type of the typed and
    /// matrix comparison paths.
    #[default]
    U8,
    /// 16-bit signed integer lanes.
    I16,
    /// 16-bit unsigned integer lanes.
    U16,
    /// 32-bit signed integer lanes.
    I32,
    /// 32-bit unsigned integer lanes.
    U32,
    /// 64-bit signed integer lanes.
    I64,
    /// 32-bit floating-point lanes.
    F32,
    /// 64-bit floating-point lanes.
    F64,
}

impl DType {
    /// Whether lanes of this type can hold NaN.
    pub fn is_float(&self) -> bool {
        matches!(self, DType::F32 | DType::F64)
    }
}
