mod comparer;
mod condition;
mod error;
mod fulfillable;
mod translate;
mod types;

pub use comparer::{
    Comparer, ComparerSet, ContainComparer, EqualityComparer, RegexComparer, ScalarComparer,
};
pub use condition::{
    BooleanCondition, Condition, CurrentUserCapabilityCondition, CurrentUserIdCondition,
    CurrentUserRoleCondition, ItemFormatCondition, ItemIdCondition, ItemLevelCondition,
    ItemParentIdCondition, ItemTemplateCondition, ItemTermCondition, ItemTypeCondition, Registry,
    TermCondition, TermLevelCondition, TermTaxonomyCondition, UserCapabilityCondition,
    UserIdCondition, UserRoleCondition,
};
pub use error::GatecheckError;
pub use fulfillable::{
    ConditionLeaf, Fulfillable, FulfillableCollection, Relation, UnknownRelation,
};
pub use translate::{translate, translate_str, TranslateError};
pub use types::{CompareOp, ConditionError, Context, Item, Term, UnknownOperator, User, Value};
