use super::{apply_negation, compare_extracted, supports_equality_only, Condition};
use crate::comparer::ComparerSet;
use crate::types::{CompareOp, Context, Value};

/// Matches the target item's identifier.
#[derive(Debug)]
pub struct ItemIdCondition {
    comparers: ComparerSet,
}

impl ItemIdCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for ItemIdCondition {
    fn name(&self) -> &'static str {
        "item_id"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let actual = ctx.item().map(|item| Value::Int(item.id));
        compare_extracted(&self.comparers, actual, expected, op)
    }
}

/// Matches the target item's parent identifier. A root item extracts `0`.
#[derive(Debug)]
pub struct ItemParentIdCondition {
    comparers: ComparerSet,
}

impl ItemParentIdCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for ItemParentIdCondition {
    fn name(&self) -> &'static str {
        "item_parent_id"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let actual = ctx
            .item()
            .map(|item| Value::Int(item.parent_id.unwrap_or(0)));
        compare_extracted(&self.comparers, actual, expected, op)
    }
}

/// Matches the target item's declared type.
#[derive(Debug)]
pub struct ItemTypeCondition {
    comparers: ComparerSet,
}

impl ItemTypeCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for ItemTypeCondition {
    fn name(&self) -> &'static str {
        "item_type"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let actual = ctx.item().map(|item| Value::String(item.kind.clone()));
        compare_extracted(&self.comparers, actual, expected, op)
    }
}

/// Matches the target item's format. Items without a format never match.
#[derive(Debug)]
pub struct ItemFormatCondition {
    comparers: ComparerSet,
}

impl ItemFormatCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for ItemFormatCondition {
    fn name(&self) -> &'static str {
        "item_format"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let actual = ctx
            .item()
            .and_then(|item| item.format.clone())
            .map(Value::String);
        compare_extracted(&self.comparers, actual, expected, op)
    }
}

/// Matches the hierarchy depth of the target item.
///
/// Depth is computed by walking parent references: 1 for a root item, +1
/// per resolvable ancestor. The walk is cycle-guarded, so corrupt parent
/// graphs yield a finite depth. Depth extraction visits every ancestor, so
/// rule authors should place this kind late in a child list to benefit
/// from short-circuiting.
#[derive(Debug)]
pub struct ItemLevelCondition {
    comparers: ComparerSet,
}

impl ItemLevelCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for ItemLevelCondition {
    fn name(&self) -> &'static str {
        "item_level"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let actual = ctx.item_level().map(Value::Int);
        compare_extracted(&self.comparers, actual, expected, op)
    }
}

/// Matches the target item's template. Items without one never match.
#[derive(Debug)]
pub struct ItemTemplateCondition {
    comparers: ComparerSet,
}

impl ItemTemplateCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for ItemTemplateCondition {
    fn name(&self) -> &'static str {
        "item_template"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let actual = ctx
            .item()
            .and_then(|item| item.template.clone())
            .map(Value::String);
        compare_extracted(&self.comparers, actual, expected, op)
    }
}

/// Self-evaluating: is the target item associated with the expected term
/// through any of its taxonomies?
///
/// The expected value is a term slug, or a list of slugs of which any may
/// match. Supports only `=`/`!=`; `!=` inverts the answer, so it is
/// vacuously true when no item is in context.
#[derive(Debug, Default)]
pub struct ItemTermCondition;

impl ItemTermCondition {
    fn has_term(ctx: &Context, expected: &Value) -> bool {
        let Some(item) = ctx.item() else {
            return false;
        };
        let mut slugs = item.terms.values().flatten();
        match expected {
            Value::String(slug) => slugs.any(|s| s == slug),
            Value::List(wanted) => slugs
                .any(|s| wanted.iter().any(|w| matches!(w, Value::String(x) if x == s))),
            _ => false,
        }
    }
}

impl Condition for ItemTermCondition {
    fn name(&self) -> &'static str {
        "item_term"
    }

    fn supports(&self, op: CompareOp) -> bool {
        supports_equality_only(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        apply_negation(Self::has_term(ctx, expected), op)
    }
}
