use thiserror::Error;

use crate::types::{CompareOp, ConditionError};

/// Errors produced while translating a rule specification.
///
/// Translation is where all validation is front-loaded: a specification
/// that translates successfully can always be evaluated. None of these
/// degrade to a default boolean — a silent default would make a container
/// universally visible or invisible.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("rule specification node must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("unknown relation '{found}' (expected 'AND' or 'OR')")]
    UnknownRelation { found: String },

    #[error("'not' must be a boolean")]
    NegationNotBool,

    #[error("relation node is missing its 'children' array")]
    MissingChildren,

    #[error("relation node 'children' must be an array")]
    ChildrenNotArray,

    #[error("child node must be a condition leaf with 'type' or a nested node with 'relation'")]
    MalformedChild,

    #[error("condition leaf '{kind}' is missing its 'value'")]
    MissingValue { kind: String },

    #[error("value for condition '{kind}' is not comparable (null or object)")]
    InvalidValue { kind: String },

    #[error("unknown comparison operator '{found}' for condition '{kind}'")]
    UnknownOperator { kind: String, found: String },

    #[error("operator '{operator}' for condition '{kind}' requires a list value")]
    ExpectedList { kind: String, operator: CompareOp },

    #[error("regex operator for condition '{kind}' requires a string pattern")]
    PatternNotString { kind: String },

    #[error("invalid regex pattern for condition '{kind}': {source}")]
    InvalidPattern {
        kind: String,
        #[source]
        source: regex::Error,
    },

    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error("invalid rule specification JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_relation_message() {
        let err = TranslateError::UnknownRelation {
            found: "XOR".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown relation 'XOR' (expected 'AND' or 'OR')"
        );
    }

    #[test]
    fn expected_list_message() {
        let err = TranslateError::ExpectedList {
            kind: "item_id".into(),
            operator: crate::types::CompareOp::In,
        };
        assert_eq!(
            err.to_string(),
            "operator 'IN' for condition 'item_id' requires a list value"
        );
    }

    #[test]
    fn condition_error_is_transparent() {
        let err = TranslateError::from(ConditionError::UnknownKind {
            name: "nope".into(),
        });
        assert_eq!(err.to_string(), "unknown condition kind 'nope'");
    }
}
