use super::{compare_extracted, Condition};
use crate::comparer::ComparerSet;
use crate::types::{CompareOp, Context, Value};

/// Boolean literal condition: the actual value is always `true`.
///
/// An always-on/always-off leaf for composing static fixtures and toggling
/// whole branches of a rule without removing them.
#[derive(Debug)]
pub struct BooleanCondition {
    comparers: ComparerSet,
}

impl BooleanCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for BooleanCondition {
    fn name(&self) -> &'static str {
        "boolean"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, _ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        compare_extracted(&self.comparers, Some(Value::Bool(true)), expected, op)
    }
}
