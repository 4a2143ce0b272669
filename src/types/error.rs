use thiserror::Error;

use super::operator::CompareOp;

/// Configuration errors raised when wiring conditions: unknown kind names,
/// operators outside a kind's surface, kinds constructed without comparers.
///
/// These always surface at registration or translation time, never during
/// evaluation.
#[derive(Debug, Error)]
pub enum ConditionError {
    #[error("unknown condition kind '{name}'")]
    UnknownKind { name: String },

    #[error("condition kind '{kind}' does not support operator '{operator}'")]
    UnsupportedOperator { kind: String, operator: CompareOp },

    #[error("condition kind '{kind}' was constructed with no comparers")]
    NoComparers { kind: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_kind_message() {
        let err = ConditionError::UnknownKind {
            name: "post_status".into(),
        };
        assert_eq!(err.to_string(), "unknown condition kind 'post_status'");
    }

    #[test]
    fn unsupported_operator_message() {
        let err = ConditionError::UnsupportedOperator {
            kind: "item_type".into(),
            operator: CompareOp::Gt,
        };
        assert_eq!(
            err.to_string(),
            "condition kind 'item_type' does not support operator '>'"
        );
    }

    #[test]
    fn no_comparers_message() {
        let err = ConditionError::NoComparers {
            kind: "item_id".into(),
        };
        assert_eq!(
            err.to_string(),
            "condition kind 'item_id' was constructed with no comparers"
        );
    }
}
