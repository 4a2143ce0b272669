use std::cmp::Ordering;
use std::fmt;

/// Supported value types for condition expected values and extracted
/// context values.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A UTF-8 string.
    String(String),
    /// An ordered list of values. Used as the expected operand of `IN` /
    /// `NOT IN` and as the extracted value of multi-valued context reads.
    List(Vec<Value>),
}

impl Value {
    /// Whether this value is a list.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Numeric view of this value: integers, floats, and strings that parse
    /// as numbers. Numeric strings compare numerically under equality and
    /// ordering, matching how declarative rule specs carry numbers as text.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::String(s) => s.parse::<f64>().ok(),
            Value::Bool(_) | Value::List(_) => None,
        }
    }

    /// Type-aware equality: values that both have a numeric view compare
    /// numerically; everything else compares strictly.
    pub(crate) fn loose_eq(&self, other: &Value) -> bool {
        match (self.as_numeric(), other.as_numeric()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }

    /// Ordering between two values, if one exists. Numeric views order
    /// numerically; non-numeric strings order lexicographically. Booleans
    /// and lists have no ordering.
    pub(crate) fn partial_cmp_value(&self, other: &Value) -> Option<Ordering> {
        match (self.as_numeric(), other.as_numeric()) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => match (self, other) {
                (Value::String(a), Value::String(b)) => a.partial_cmp(b),
                _ => None,
            },
        }
    }

    /// Convert a JSON value from a rule specification.
    ///
    /// Returns `None` for values a condition cannot compare against:
    /// `null`, objects, numbers outside the `i64`/`f64` range, and lists
    /// containing any such value.
    #[must_use]
    pub fn from_json(json: &serde_json::Value) -> Option<Value> {
        match json {
            serde_json::Value::Bool(b) => Some(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Value::Int(i))
                } else {
                    n.as_f64().map(Value::Float)
                }
            }
            serde_json::Value::String(s) => Some(Value::String(s.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(Value::from_json)
                .collect::<Option<Vec<Value>>>()
                .map(Value::List),
            serde_json::Value::Null | serde_json::Value::Object(_) => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::String(v) => write!(f, "\"{v}\""),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
        }
    }
}
