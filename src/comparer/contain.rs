use super::Comparer;
use crate::types::{CompareOp, Value};

/// Set membership: `IN` and `NOT IN`.
///
/// The expected value is treated as a set. A scalar actual is tested for
/// membership; a list actual is tested for any overlap ("contains any of").
/// A non-list expected value has no members, so `IN` answers `false` and
/// `NOT IN` answers `true`.
#[derive(Debug, Default)]
pub struct ContainComparer;

impl Comparer for ContainComparer {
    fn supports(&self, op: CompareOp) -> bool {
        matches!(op, CompareOp::In | CompareOp::NotIn)
    }

    fn compare(&self, actual: &Value, expected: &Value, op: CompareOp) -> bool {
        let overlap = match expected {
            Value::List(set) => match actual {
                Value::List(items) => items
                    .iter()
                    .any(|item| set.iter().any(|member| item.loose_eq(member))),
                scalar => set.iter().any(|member| scalar.loose_eq(member)),
            },
            _ => false,
        };
        match op {
            CompareOp::In => overlap,
            CompareOp::NotIn => !overlap,
            _ => false,
        }
    }
}
