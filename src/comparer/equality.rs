use super::Comparer;
use crate::types::{CompareOp, Value};

/// Identity comparison: `=` and `!=`.
///
/// Type-aware: values with a numeric view (integers, floats, numeric
/// strings) compare numerically; everything else compares strictly.
#[derive(Debug, Default)]
pub struct EqualityComparer;

impl Comparer for EqualityComparer {
    fn supports(&self, op: CompareOp) -> bool {
        matches!(op, CompareOp::Eq | CompareOp::Neq)
    }

    fn compare(&self, actual: &Value, expected: &Value, op: CompareOp) -> bool {
        let equal = actual.loose_eq(expected);
        match op {
            CompareOp::Eq => equal,
            CompareOp::Neq => !equal,
            _ => false,
        }
    }
}
