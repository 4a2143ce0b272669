use regex::Regex;

use super::Comparer;
use crate::types::{CompareOp, Value};

/// Pattern matching: `REGEX`.
///
/// The expected value is a pattern string; the actual value is coerced to
/// text before matching. Lists cannot be coerced and never match. A pattern
/// that fails to compile never matches either; translation validates
/// patterns up front so that path is only reachable through hand-built
/// trees.
#[derive(Debug, Default)]
pub struct RegexComparer;

impl RegexComparer {
    fn coerce(actual: &Value) -> Option<String> {
        match actual {
            Value::String(s) => Some(s.clone()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            Value::List(_) => None,
        }
    }
}

impl Comparer for RegexComparer {
    fn supports(&self, op: CompareOp) -> bool {
        op == CompareOp::Regex
    }

    fn compare(&self, actual: &Value, expected: &Value, op: CompareOp) -> bool {
        if op != CompareOp::Regex {
            return false;
        }
        let Value::String(pattern) = expected else {
            return false;
        };
        let Some(subject) = Self::coerce(actual) else {
            return false;
        };
        match Regex::new(pattern) {
            Ok(re) => re.is_match(&subject),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_string_actual() {
        assert!(RegexComparer.compare(
            &Value::from("landing-page"),
            &Value::from("^landing-"),
            CompareOp::Regex
        ));
        assert!(!RegexComparer.compare(
            &Value::from("article"),
            &Value::from("^landing-"),
            CompareOp::Regex
        ));
    }

    #[test]
    fn coerces_numbers_to_text() {
        assert!(RegexComparer.compare(&Value::Int(1042), &Value::from("^10"), CompareOp::Regex));
        assert!(RegexComparer.compare(&Value::Bool(true), &Value::from("^tru"), CompareOp::Regex));
    }

    #[test]
    fn lists_never_match() {
        assert!(!RegexComparer.compare(
            &Value::from(vec!["a"]),
            &Value::from(".*"),
            CompareOp::Regex
        ));
    }

    #[test]
    fn non_string_pattern_never_matches() {
        assert!(!RegexComparer.compare(&Value::from("a"), &Value::Int(1), CompareOp::Regex));
    }

    #[test]
    fn invalid_pattern_never_matches() {
        assert!(!RegexComparer.compare(&Value::from("a"), &Value::from("[unclosed"), CompareOp::Regex));
    }

    #[test]
    fn declared_operator_only() {
        assert!(RegexComparer.supports(CompareOp::Regex));
        assert!(!RegexComparer.supports(CompareOp::Eq));
    }
}
