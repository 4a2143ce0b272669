use super::{apply_negation, compare_extracted, supports_equality_only, Condition};
use crate::comparer::ComparerSet;
use crate::types::{CompareOp, Context, Value};

/// Membership test shared by the role/capability kinds: the expected value
/// is a single name, or a list of names of which any may match.
fn holds_any(held: &[String], expected: &Value) -> bool {
    match expected {
        Value::String(name) => held.iter().any(|h| h == name),
        Value::List(wanted) => wanted
            .iter()
            .any(|w| matches!(w, Value::String(name) if held.iter().any(|h| h == name))),
        _ => false,
    }
}

/// Matches the target user's identifier.
#[derive(Debug)]
pub struct UserIdCondition {
    comparers: ComparerSet,
}

impl UserIdCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for UserIdCondition {
    fn name(&self) -> &'static str {
        "user_id"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let actual = ctx.user().map(|user| Value::Int(user.id));
        compare_extracted(&self.comparers, actual, expected, op)
    }
}

/// Self-evaluating: does the target user hold the expected role?
/// `!=` inverts, so it is vacuously true when no target user is in context.
#[derive(Debug, Default)]
pub struct UserRoleCondition;

impl Condition for UserRoleCondition {
    fn name(&self) -> &'static str {
        "user_role"
    }

    fn supports(&self, op: CompareOp) -> bool {
        supports_equality_only(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let holds = ctx
            .user()
            .is_some_and(|user| holds_any(&user.roles, expected));
        apply_negation(holds, op)
    }
}

/// Self-evaluating: does the target user hold the expected capability?
#[derive(Debug, Default)]
pub struct UserCapabilityCondition;

impl Condition for UserCapabilityCondition {
    fn name(&self) -> &'static str {
        "user_capability"
    }

    fn supports(&self, op: CompareOp) -> bool {
        supports_equality_only(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let holds = ctx
            .user()
            .is_some_and(|user| holds_any(&user.capabilities, expected));
        apply_negation(holds, op)
    }
}

/// Matches the currently authenticated user's identifier.
#[derive(Debug)]
pub struct CurrentUserIdCondition {
    comparers: ComparerSet,
}

impl CurrentUserIdCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for CurrentUserIdCondition {
    fn name(&self) -> &'static str {
        "current_user_id"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let actual = ctx.current_user().map(|user| Value::Int(user.id));
        compare_extracted(&self.comparers, actual, expected, op)
    }
}

/// Self-evaluating: does the currently authenticated user hold the role?
#[derive(Debug, Default)]
pub struct CurrentUserRoleCondition;

impl Condition for CurrentUserRoleCondition {
    fn name(&self) -> &'static str {
        "current_user_role"
    }

    fn supports(&self, op: CompareOp) -> bool {
        supports_equality_only(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let holds = ctx
            .current_user()
            .is_some_and(|user| holds_any(&user.roles, expected));
        apply_negation(holds, op)
    }
}

/// Self-evaluating: does the currently authenticated user hold the
/// capability?
#[derive(Debug, Default)]
pub struct CurrentUserCapabilityCondition;

impl Condition for CurrentUserCapabilityCondition {
    fn name(&self) -> &'static str {
        "current_user_capability"
    }

    fn supports(&self, op: CompareOp) -> bool {
        supports_equality_only(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let holds = ctx
            .current_user()
            .is_some_and(|user| holds_any(&user.capabilities, expected));
        apply_negation(holds, op)
    }
}
