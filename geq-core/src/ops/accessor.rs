// geq-core/src/ops/accessor.rs

use log::trace;

use crate::error::GeqError;
use crate::operand::Operand;
use crate::options::{Accessor, ComparatorExtraction};
use crate::outcome::{Outcome, OutputSink};
use crate::value::{Side, Value};

use super::element::geq_values;
use super::{check_len, Comparator};

const OP: &str = "geq_accessor";

/// Comparator side once the extraction decision has been made.
enum Resolved<'a> {
    /// Comparator elements go through the accessor with `Side::Comparator`.
    Extracted(&'a [Value]),
    Direct(Comparator<'a>),
}

impl<'a> Resolved<'a> {
    fn new(comparator: &'a Operand, accessor: &Accessor, len: usize) -> Result<Self, GeqError> {
        let direct = Comparator::resolve(OP, comparator, len)?;
        let items = match direct {
            Comparator::Plain(items) => items,
            other => return Ok(Resolved::Direct(other)),
        };
        let extract = match accessor.extraction() {
            ComparatorExtraction::Always => true,
            ComparatorExtraction::Never => false,
            ComparatorExtraction::Infer => items.first().map_or(false, Value::is_structured),
        };
        trace!("{}: comparator extraction {:?} -> {}", OP, accessor.extraction(), extract);
        Ok(if extract {
            Resolved::Extracted(items)
        } else {
            Resolved::Direct(direct)
        })
    }

    #[inline]
    fn outcome(&self, accessor: &Accessor, i: usize, element: &Value) -> Outcome {
        let x = accessor.call(element, i, Side::Primary);
        match self {
            Resolved::Extracted(ys) => {
                let y = accessor.call(&ys[i], i, Side::Comparator);
                geq_values(&x, &y)
            }
            Resolved::Direct(rhs) => rhs.outcome(i, &x),
        }
    }
}

/// Compares a plain sequence element-wise after extracting each element's
/// value with `accessor(element, i, Side::Primary)`.
///
/// The comparator may be a broadcast value, a typed sequence, or a plain
/// sequence. Broadcast values and typed sequences are always used as they
/// are. Whether a plain comparator sequence is extracted as well depends on
/// the accessor's [`ComparatorExtraction`]; with the default `Infer` mode
/// the first comparator element decides for the whole sequence.
///
/// # Errors
/// - `MismatchedLength` if `comparator` or `out` differ in length from
///   `primary`. Nothing is written in that case.
/// - `InvalidArgument` if `comparator` is a matrix.
pub fn apply<S>(out: &mut S, primary: &[Value], comparator: &Operand, accessor: &Accessor) -> Result<(), GeqError>
where
    S: OutputSink + ?Sized,
{
    let rhs = Resolved::new(comparator, accessor, primary.len())?;
    check_len(OP, primary.len(), out.sink_len())?;
    trace!("{}: {} elements against {}", OP, primary.len(), comparator.kind());

    for (i, element) in primary.iter().enumerate() {
        out.write(i, rhs.outcome(accessor, i, element));
    }
    Ok(())
}

/// Same as [`apply`], overwriting `primary` with its own results.
pub fn apply_in_place(primary: &mut [Value], comparator: &Operand, accessor: &Accessor) -> Result<(), GeqError> {
    let rhs = Resolved::new(comparator, accessor, primary.len())?;
    trace!("{}: {} elements in place against {}", OP, primary.len(), comparator.kind());

    for (i, slot) in primary.iter_mut().enumerate() {
        let outcome = rhs.outcome(accessor, i, slot);
        *slot = outcome.to_value();
    }
    Ok(())
}

#[cfg(test)]
#[path = "accessor_test.rs"]
mod tests;
