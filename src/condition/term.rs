use super::{compare_extracted, Condition};
use crate::comparer::ComparerSet;
use crate::types::{CompareOp, Context, Value};

/// Matches the target term's identifier.
#[derive(Debug)]
pub struct TermCondition {
    comparers: ComparerSet,
}

impl TermCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for TermCondition {
    fn name(&self) -> &'static str {
        "term"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let actual = ctx.term().map(|term| Value::Int(term.id));
        compare_extracted(&self.comparers, actual, expected, op)
    }
}

/// Matches the taxonomy the target term belongs to.
#[derive(Debug)]
pub struct TermTaxonomyCondition {
    comparers: ComparerSet,
}

impl TermTaxonomyCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for TermTaxonomyCondition {
    fn name(&self) -> &'static str {
        "term_taxonomy"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let actual = ctx
            .term()
            .map(|term| Value::String(term.taxonomy.clone()));
        compare_extracted(&self.comparers, actual, expected, op)
    }
}

/// Matches the hierarchy depth of the target term, computed like
/// [`item_level`](crate::types::Context::item_level) but over the term
/// ancestor table.
#[derive(Debug)]
pub struct TermLevelCondition {
    comparers: ComparerSet,
}

impl TermLevelCondition {
    #[must_use]
    pub fn new(comparers: ComparerSet) -> Self {
        Self { comparers }
    }
}

impl Condition for TermLevelCondition {
    fn name(&self) -> &'static str {
        "term_level"
    }

    fn supports(&self, op: CompareOp) -> bool {
        self.comparers.supports(op)
    }

    fn is_fulfilled(&self, ctx: &Context, op: CompareOp, expected: &Value) -> bool {
        let actual = ctx.term_level().map(Value::Int);
        compare_extracted(&self.comparers, actual, expected, op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Term;

    fn category_ctx() -> Context {
        Context::new()
            .with_term(Term::new(20, "tech", "category").with_parent(10))
            .with_ancestor_term(Term::new(10, "news", "category"))
    }

    #[test]
    fn term_id_matches() {
        let cond = TermCondition::new(ComparerSet::without_scalar());
        assert!(cond.is_fulfilled(&category_ctx(), CompareOp::Eq, &Value::Int(20)));
        assert!(cond.is_fulfilled(
            &category_ctx(),
            CompareOp::In,
            &Value::from(vec![10_i64, 20])
        ));
        assert!(!cond.is_fulfilled(&Context::new(), CompareOp::Eq, &Value::Int(20)));
    }

    #[test]
    fn taxonomy_matches() {
        let cond = TermTaxonomyCondition::new(ComparerSet::without_scalar());
        assert!(cond.is_fulfilled(&category_ctx(), CompareOp::Eq, &Value::from("category")));
        assert!(cond.is_fulfilled(&category_ctx(), CompareOp::Neq, &Value::from("tag")));
    }

    #[test]
    fn term_level_compares_depth() {
        let cond = TermLevelCondition::new(ComparerSet::generic());
        assert!(cond.is_fulfilled(&category_ctx(), CompareOp::Eq, &Value::Int(2)));
        assert!(cond.is_fulfilled(&category_ctx(), CompareOp::Lte, &Value::Int(2)));
        assert!(!cond.is_fulfilled(&Context::new(), CompareOp::Eq, &Value::Int(2)));
    }
}
