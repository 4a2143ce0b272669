use std::fmt;
use std::str::FromStr;

/// Comparison operators a rule specification may request.
///
/// Each comparer strategy declares the subset it supports; a condition
/// kind's operator surface is the union over its bound comparers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    NotIn,
    Regex,
}

impl CompareOp {
    /// The default operator when a rule leaf omits `compare`.
    pub const DEFAULT: CompareOp = CompareOp::Eq;

    /// The canonical token, as written in rule specifications.
    #[must_use]
    pub fn token(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Neq => "!=",
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
            CompareOp::In => "IN",
            CompareOp::NotIn => "NOT IN",
            CompareOp::Regex => "REGEX",
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when an operator token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl fmt::Display for UnknownOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown comparison operator '{}'", self.0)
    }
}

impl std::error::Error for UnknownOperator {}

impl FromStr for CompareOp {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" => Ok(CompareOp::Eq),
            "!=" => Ok(CompareOp::Neq),
            ">" => Ok(CompareOp::Gt),
            ">=" => Ok(CompareOp::Gte),
            "<" => Ok(CompareOp::Lt),
            "<=" => Ok(CompareOp::Lte),
            "IN" => Ok(CompareOp::In),
            "NOT IN" => Ok(CompareOp::NotIn),
            "REGEX" => Ok(CompareOp::Regex),
            other => Err(UnknownOperator(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let ops = [
            CompareOp::Eq,
            CompareOp::Neq,
            CompareOp::Gt,
            CompareOp::Gte,
            CompareOp::Lt,
            CompareOp::Lte,
            CompareOp::In,
            CompareOp::NotIn,
            CompareOp::Regex,
        ];
        for op in ops {
            assert_eq!(op.token().parse::<CompareOp>().unwrap(), op);
        }
    }

    #[test]
    fn parse_unknown_token() {
        assert!("~=".parse::<CompareOp>().is_err());
        assert!("".parse::<CompareOp>().is_err());
    }

    #[test]
    fn default_is_equality() {
        assert_eq!(CompareOp::DEFAULT, CompareOp::Eq);
    }
}
