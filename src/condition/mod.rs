mod boolean;
mod item;
mod registry;
mod term;
mod user;

pub use boolean::BooleanCondition;
pub use item::{
    ItemFormatCondition, ItemIdCondition, ItemLevelCondition, ItemParentIdCondition,
    ItemTemplateCondition, ItemTermCondition, ItemTypeCondition,
};
pub use registry::Registry;
pub use term::{TermCondition, TermLevelCondition, TermTaxonomyCondition};
pub use user::{
    CurrentUserCapabilityCondition, CurrentUserIdCondition, CurrentUserRoleCondition,
    UserCapabilityCondition, UserIdCondition, UserRoleCondition,
};

use std::fmt;

use crate::comparer::ComparerSet;
use crate::types::{CompareOp, Context, Value};

/// A named rule type.
///
/// Generic kinds extract an actual value from the context and delegate to
/// the first bound comparer that supports the requested operator.
/// Self-evaluating kinds answer their domain question directly and honor
/// only `=`/`!=`, where `!=` inverts the answer.
///
/// `is_fulfilled` never fails: kinds whose target is missing from the
/// context answer their documented safe default instead.
pub trait Condition: fmt::Debug + Send + Sync {
    /// The canonical registry key for this kind.
    fn name(&self) -> &'static str;

    /// Whether this kind accepts the operator. For generic kinds this is
    /// the union of the bound comparers' operator sets.
    fn supports(&self, op: CompareOp) -> bool;

    /// Decide whether the condition holds for the context.
    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool;
}

/// Every operator, for probing a kind's full surface.
pub(crate) const ALL_OPS: [CompareOp; 9] = [
    CompareOp::Eq,
    CompareOp::Neq,
    CompareOp::Gt,
    CompareOp::Gte,
    CompareOp::Lt,
    CompareOp::Lte,
    CompareOp::In,
    CompareOp::NotIn,
    CompareOp::Regex,
];

/// Generic-kind evaluation: a missing extraction answers `false`.
pub(crate) fn compare_extracted(
    comparers: &ComparerSet,
    actual: Option<Value>,
    expected: &Value,
    op: CompareOp,
) -> bool {
    match actual {
        Some(actual) => comparers.compare(&actual, expected, op),
        None => false,
    }
}

/// Self-evaluating-kind operator handling: `!=` inverts, everything else
/// passes the answer through. Kinds using this only declare `=`/`!=`.
pub(crate) fn apply_negation(holds: bool, op: CompareOp) -> bool {
    if op == CompareOp::Neq {
        !holds
    } else {
        holds
    }
}

/// Operator surface of self-evaluating kinds.
pub(crate) fn supports_equality_only(op: CompareOp) -> bool {
    matches!(op, CompareOp::Eq | CompareOp::Neq)
}
