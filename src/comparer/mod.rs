mod contain;
mod equality;
mod regex;
mod scalar;

pub use contain::ContainComparer;
pub use equality::EqualityComparer;
pub use scalar::ScalarComparer;

pub use self::regex::RegexComparer;

use std::fmt;

use crate::types::{CompareOp, Value};

/// An interchangeable comparison strategy.
///
/// A comparer declares the operator symbols it implements and compares an
/// extracted actual value against a rule's expected value. Comparers never
/// coerce their way around an operator they do not declare; selection
/// happens in [`ComparerSet`] before `compare` is reached.
pub trait Comparer: fmt::Debug + Send + Sync {
    /// Whether this comparer implements the given operator.
    fn supports(&self, op: CompareOp) -> bool;

    /// Compare `actual` against `expected` under `op`.
    ///
    /// Callers select the comparer via [`Comparer::supports`] first; an
    /// unsupported operator answers `false`.
    fn compare(&self, actual: &Value, expected: &Value, op: CompareOp) -> bool;
}

/// An ordered list of comparers bound to a condition kind.
///
/// Selection picks the *first* comparer whose operator set contains the
/// requested operator. The ordering is part of the kind's contract: in the
/// standard bundles equality always wins `=`/`!=` ahead of the scalar
/// comparer.
#[derive(Debug)]
pub struct ComparerSet {
    comparers: Vec<Box<dyn Comparer>>,
}

impl ComparerSet {
    #[must_use]
    pub fn new(comparers: Vec<Box<dyn Comparer>>) -> Self {
        Self { comparers }
    }

    /// The full bundle: equality, contain, scalar, regex.
    #[must_use]
    pub fn generic() -> Self {
        Self::new(vec![
            Box::new(EqualityComparer),
            Box::new(ContainComparer),
            Box::new(ScalarComparer),
            Box::new(RegexComparer),
        ])
    }

    /// The bundle for kinds whose values carry no ordering (names, slugs):
    /// equality, contain, regex. Excluding the scalar comparer forbids
    /// `>`/`<` comparisons on non-ordinal data.
    #[must_use]
    pub fn without_scalar() -> Self {
        Self::new(vec![
            Box::new(EqualityComparer),
            Box::new(ContainComparer),
            Box::new(RegexComparer),
        ])
    }

    /// Equality only. Used by the boolean literal kind.
    #[must_use]
    pub fn equality_only() -> Self {
        Self::new(vec![Box::new(EqualityComparer)])
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.comparers.is_empty()
    }

    /// Whether any bound comparer supports the operator.
    #[must_use]
    pub fn supports(&self, op: CompareOp) -> bool {
        self.comparers.iter().any(|c| c.supports(op))
    }

    /// The first bound comparer supporting the operator.
    #[must_use]
    pub fn select(&self, op: CompareOp) -> Option<&dyn Comparer> {
        self.comparers
            .iter()
            .find(|c| c.supports(op))
            .map(AsRef::as_ref)
    }

    /// Compare via the first supporting comparer. Answers `false` when no
    /// bound comparer supports the operator; translation rejects such
    /// operators up front, so this path is only reachable through
    /// hand-built trees.
    #[must_use]
    pub fn compare(&self, actual: &Value, expected: &Value, op: CompareOp) -> bool {
        self.select(op)
            .is_some_and(|c| c.compare(actual, expected, op))
    }
}
