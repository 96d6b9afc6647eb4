//! WHERE and ORDER BY clause types.
//!
//! - [`Operator`]: the fixed set of comparison operators accepted by WHERE
//! - [`Connector`]: how a clause joins the previous one (`where`/`and`/`or`)
//! - [`Direction`]: ORDER BY direction, with lenient normalization

use crate::error::{BuilderError, BuildResult};
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

/// Comparison operator allowed in a WHERE clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Lt,
    Gt,
    Lte,
    Gte,
    LtGt,
    Ne,
    NullSafeEq,
    Like,
    LikeBinary,
    NotLike,
    Rlike,
    Regexp,
    NotRegexp,
}

impl Operator {
    /// Every allowed operator, in canonical order.
    pub const ALL: [Operator; 14] = [
        Operator::Eq,
        Operator::Lt,
        Operator::Gt,
        Operator::Lte,
        Operator::Gte,
        Operator::LtGt,
        Operator::Ne,
        Operator::NullSafeEq,
        Operator::Like,
        Operator::LikeBinary,
        Operator::NotLike,
        Operator::Rlike,
        Operator::Regexp,
        Operator::NotRegexp,
    ];

    /// The SQL token for this operator (lowercase for keyword operators).
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Lt => "<",
            Operator::Gt => ">",
            Operator::Lte => "<=",
            Operator::Gte => ">=",
            Operator::LtGt => "<>",
            Operator::Ne => "!=",
            Operator::NullSafeEq => "<=>",
            Operator::Like => "like",
            Operator::LikeBinary => "like binary",
            Operator::NotLike => "not like",
            Operator::Rlike => "rlike",
            Operator::Regexp => "regexp",
            Operator::NotRegexp => "not regexp",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse; anything outside the allowed set is rejected.
impl FromStr for Operator {
    type Err = BuilderError;

    fn from_str(s: &str) -> BuildResult<Self> {
        let lowered = s.to_lowercase();
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == lowered)
            .ok_or_else(|| BuilderError::invalid_argument(format!("Illegal operator \"{s}\"")))
    }
}

/// Boolean connector preceding a WHERE clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    /// Leading keyword of the first clause.
    Where,
    And,
    Or,
}

impl Connector {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connector::Where => "where",
            Connector::And => "and",
            Connector::Or => "or",
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the exact lowercase strings `and` and `or` are accepted.
impl FromStr for Connector {
    type Err = BuilderError;

    fn from_str(s: &str) -> BuildResult<Self> {
        match s {
            "and" => Ok(Connector::And),
            "or" => Ok(Connector::Or),
            _ => Err(BuilderError::invalid_argument(format!(
                "Invalid where type \"{s}\""
            ))),
        }
    }
}

/// ORDER BY direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Exactly `"asc"` is ascending; every other string means descending.
    pub fn normalize(s: &str) -> Self {
        if s == "asc" {
            Direction::Asc
        } else {
            Direction::Desc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Asc => "asc",
            Direction::Desc => "desc",
        }
    }
}

impl From<&str> for Direction {
    fn from(s: &str) -> Self {
        Direction::normalize(s)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One WHERE predicate: `<connector> <column> <operator> <value>`.
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    pub connector: Connector,
    pub column: String,
    pub operator: Operator,
    /// The operator as the caller spelled it; this is what gets rendered.
    pub token: String,
    pub value: Value,
}

/// One ORDER BY item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderClause {
    pub column: String,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_parse_case_insensitive() {
        assert_eq!("LIKE".parse::<Operator>().unwrap(), Operator::Like);
        assert_eq!("Not Regexp".parse::<Operator>().unwrap(), Operator::NotRegexp);
        assert_eq!("<=>".parse::<Operator>().unwrap(), Operator::NullSafeEq);
    }

    #[test]
    fn test_operator_parse_rejects_unknown() {
        for bad in ["==", "ilike", "in", "", "like  binary"] {
            let err = bad.parse::<Operator>().unwrap_err();
            assert!(err.is_invalid_argument(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_connector_parse_is_exact() {
        assert_eq!("and".parse::<Connector>().unwrap(), Connector::And);
        assert_eq!("or".parse::<Connector>().unwrap(), Connector::Or);
        assert!("AND".parse::<Connector>().is_err());
        assert!("where".parse::<Connector>().is_err());
        assert!("xor".parse::<Connector>().is_err());
    }

    #[test]
    fn test_direction_normalize() {
        assert_eq!(Direction::normalize("asc"), Direction::Asc);
        assert_eq!(Direction::normalize("desc"), Direction::Desc);
        assert_eq!(Direction::normalize("ASC"), Direction::Desc);
        assert_eq!(Direction::normalize("sideways"), Direction::Desc);
    }
}
