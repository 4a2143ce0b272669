use std::fmt;
use std::str::FromStr;

use crate::condition::{Condition, ALL_OPS};
use crate::types::{CompareOp, ConditionError, Context, Value};

/// Logical relation of a collection node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    And,
    Or,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relation::And => f.write_str("AND"),
            Relation::Or => f.write_str("OR"),
        }
    }
}

/// Error returned when a relation keyword is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRelation(pub String);

impl fmt::Display for UnknownRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown relation '{}'", self.0)
    }
}

impl std::error::Error for UnknownRelation {}

impl FromStr for Relation {
    type Err = UnknownRelation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AND") {
            Ok(Relation::And)
        } else if s.eq_ignore_ascii_case("OR") {
            Ok(Relation::Or)
        } else {
            Err(UnknownRelation(s.to_owned()))
        }
    }
}

/// A leaf of the fulfillable tree: a condition kind instance plus its
/// configured operator and expected value.
#[derive(Debug)]
pub struct ConditionLeaf {
    kind: Box<dyn Condition>,
    op: CompareOp,
    expected: Value,
}

impl ConditionLeaf {
    /// Bind a condition kind to an operator and expected value.
    ///
    /// Validation is front-loaded here so evaluation can never fail.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError::NoComparers`] when the kind's operator
    /// surface is empty, and [`ConditionError::UnsupportedOperator`] when
    /// the kind does not accept `op`.
    pub fn new(
        kind: Box<dyn Condition>,
        op: CompareOp,
        expected: Value,
    ) -> Result<Self, ConditionError> {
        if !kind.supports(op) {
            if ALL_OPS.iter().all(|&candidate| !kind.supports(candidate)) {
                return Err(ConditionError::NoComparers {
                    kind: kind.name().to_owned(),
                });
            }
            return Err(ConditionError::UnsupportedOperator {
                kind: kind.name().to_owned(),
                operator: op,
            });
        }
        Ok(Self { kind, op, expected })
    }

    #[must_use]
    pub fn kind_name(&self) -> &str {
        self.kind.name()
    }

    #[must_use]
    pub fn operator(&self) -> CompareOp {
        self.op
    }

    #[must_use]
    pub fn expected(&self) -> &Value {
        &self.expected
    }

    #[must_use]
    fn is_fulfilled(&self, ctx: &Context) -> bool {
        self.kind.is_fulfilled(ctx, self.op, &self.expected)
    }
}

/// An interior node: ordered children under a logical relation, with an
/// optional negation applied once to the node's own result.
#[derive(Debug)]
pub struct FulfillableCollection {
    relation: Relation,
    negated: bool,
    children: Vec<Fulfillable>,
}

impl FulfillableCollection {
    #[must_use]
    pub fn new(relation: Relation) -> Self {
        Self {
            relation,
            negated: false,
            children: Vec::new(),
        }
    }

    /// Mark this node negated.
    #[must_use]
    pub fn negated(mut self) -> Self {
        self.negated = true;
        self
    }

    /// Append a child, keeping declaration order.
    #[must_use]
    pub fn with(mut self, child: impl Into<Fulfillable>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child (mutable reference version).
    pub fn push(&mut self, child: impl Into<Fulfillable>) {
        self.children.push(child.into());
    }

    #[must_use]
    pub fn relation(&self) -> Relation {
        self.relation
    }

    #[must_use]
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    #[must_use]
    pub fn children(&self) -> &[Fulfillable] {
        &self.children
    }

    /// Evaluate children left to right with short-circuiting.
    ///
    /// An empty `AND` is vacuously true (no restriction imposed); an empty
    /// `OR` is vacuously false (never satisfied). Negation inverts the
    /// relation result once, at this node.
    #[must_use]
    pub fn is_fulfilled(&self, ctx: &Context) -> bool {
        let result = match self.relation {
            Relation::And => self.children.iter().all(|child| child.is_fulfilled(ctx)),
            Relation::Or => self.children.iter().any(|child| child.is_fulfilled(ctx)),
        };
        if self.negated {
            !result
        } else {
            result
        }
    }
}

/// A node of the condition tree: a condition leaf or a nested collection.
///
/// Trees are built once — by the translator or programmatically — and are
/// immutable thereafter; share them freely across threads and evaluate
/// concurrently. A changed rule specification means a rebuilt tree.
#[derive(Debug)]
pub enum Fulfillable {
    Condition(ConditionLeaf),
    Collection(FulfillableCollection),
}

impl Fulfillable {
    /// Decide whether this tree is satisfied by the context.
    #[must_use]
    pub fn is_fulfilled(&self, ctx: &Context) -> bool {
        match self {
            Fulfillable::Condition(leaf) => leaf.is_fulfilled(ctx),
            Fulfillable::Collection(collection) => collection.is_fulfilled(ctx),
        }
    }
}

impl From<ConditionLeaf> for Fulfillable {
    fn from(leaf: ConditionLeaf) -> Self {
        Fulfillable::Condition(leaf)
    }
}

impl From<FulfillableCollection> for Fulfillable {
    fn from(collection: FulfillableCollection) -> Self {
        Fulfillable::Collection(collection)
    }
}

impl fmt::Display for Fulfillable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fulfillable::Condition(leaf) => {
                write!(f, "({} {} {})", leaf.kind_name(), leaf.op, leaf.expected)
            }
            Fulfillable::Collection(collection) => {
                if collection.negated {
                    f.write_str("NOT ")?;
                }
                f.write_str("(")?;
                for (i, child) in collection.children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", collection.relation)?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str(")")
            }
        }
    }
}
