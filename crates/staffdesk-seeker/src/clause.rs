//! Single predicates.
//!
//! A [`Clause`] names a field, an [`Op`] and the value to compare against.
//! Queries are lists of clauses in three groups; see [`Query`](crate::Query).

use chrono::NaiveDate;

use crate::error::{Result, SeekerError};
use crate::op::Op;
use crate::value::{Number, Value, DATE_FORMAT};

/// One predicate over one field.
///
/// ```
/// use staffdesk_seeker::{Clause, Op, Value};
///
/// let clause = Clause::new("item", Op::Contains, "MAC");
/// assert!(clause.matches(&Value::String("iMac")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    pub field: String,
    pub op: Op,
    pub value: ClauseValue,
}

impl Clause {
    /// `Contains` needles are lowercased here, once per query.
    pub fn new(field: impl Into<String>, op: Op, value: impl Into<ClauseValue>) -> Self {
        let value = match (op, value.into()) {
            (Op::Contains, ClauseValue::Text(needle)) => ClauseValue::Text(needle.to_lowercase()),
            (_, value) => value,
        };
        Clause {
            field: field.into(),
            op,
            value,
        }
    }

    /// Tests one field value.
    ///
    /// A missing value fails every clause, `Ne` included. Mismatched kinds
    /// (a date bound against a text field, say) also fail.
    pub fn matches(&self, field_value: &Value<'_>) -> bool {
        if field_value.is_none() {
            return false;
        }

        match (self.op, &self.value, field_value) {
            (Op::Contains, ClauseValue::Text(needle), _) => field_value.contains_lowercase(needle),
            (Op::Eq, ClauseValue::Text(token), _) => field_value.matches_token(token),
            (Op::Ne, ClauseValue::Text(token), _) => !field_value.matches_token(token),
            (op, ClauseValue::Text(bound), Value::String(s)) if op.is_ordering() => {
                op.accepts((*s).cmp(bound.as_str()))
            }
            (op, ClauseValue::Number(bound), Value::Number(n)) => {
                n.compare(*bound).is_some_and(|ordering| op.accepts(ordering))
            }
            (op, ClauseValue::Date(bound), Value::Date(d)) => op.accepts(d.cmp(bound)),
            _ => false,
        }
    }
}

/// Owned value for storage in a clause.
///
/// Unlike [`Value`], which borrows from the source record, `ClauseValue`
/// owns its data so it can be stored in query definitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseValue {
    /// Text or enum token.
    Text(String),
    /// Numeric value.
    Number(Number),
    /// Calendar date.
    Date(NaiveDate),
}

impl ClauseValue {
    /// Parses a `YYYY-MM-DD` date bound.
    pub fn parse_date(input: &str) -> Result<Self> {
        NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
            .map(ClauseValue::Date)
            .map_err(|source| SeekerError::InvalidDate {
                input: input.to_string(),
                source,
            })
    }
}

impl From<String> for ClauseValue {
    fn from(s: String) -> Self {
        ClauseValue::Text(s)
    }
}

impl From<&str> for ClauseValue {
    fn from(s: &str) -> Self {
        ClauseValue::Text(s.to_string())
    }
}

impl From<&String> for ClauseValue {
    fn from(s: &String) -> Self {
        ClauseValue::Text(s.clone())
    }
}

impl From<Number> for ClauseValue {
    fn from(n: Number) -> Self {
        ClauseValue::Number(n)
    }
}

impl From<NaiveDate> for ClauseValue {
    fn from(d: NaiveDate) -> Self {
        ClauseValue::Date(d)
    }
}

impl From<i64> for ClauseValue {
    fn from(n: i64) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<u32> for ClauseValue {
    fn from(n: u32) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

impl From<f64> for ClauseValue {
    fn from(n: f64) -> Self {
        ClauseValue::Number(Number::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn token_eq_is_case_sensitive() {
        let clause = Clause::new("status", Op::Eq, "active");
        assert!(clause.matches(&Value::Enum("active")));
        assert!(!clause.matches(&Value::Enum("returned")));
        assert!(!clause.matches(&Value::String("Active")));
    }

    #[test]
    fn token_ne() {
        let clause = Clause::new("status", Op::Ne, "returned");
        assert!(clause.matches(&Value::Enum("active")));
        assert!(!clause.matches(&Value::Enum("returned")));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let clause = Clause::new("item", Op::Contains, "Mac");
        assert_eq!(clause.value, ClauseValue::Text("mac".to_string()));
        assert!(clause.matches(&Value::String("MacBook Pro")));
        assert!(clause.matches(&Value::String("iMac")));
        assert!(!clause.matches(&Value::String("iPhone")));
    }

    #[test]
    fn contains_empty_needle_matches_any_text() {
        let clause = Clause::new("item", Op::Contains, "");
        assert!(clause.matches(&Value::String("anything")));
        assert!(clause.matches(&Value::String("")));
    }

    #[test]
    fn number_comparisons() {
        let gt = Clause::new("cost", Op::Gt, 1000i64);
        assert!(gt.matches(&Value::Number(Number::F64(1250.0))));
        assert!(!gt.matches(&Value::Number(Number::U64(1000))));

        let lte = Clause::new("cost", Op::Lte, 1000i64);
        assert!(lte.matches(&Value::Number(Number::U64(1000))));
        assert!(!lte.matches(&Value::Number(Number::F64(f64::NAN))));
    }

    #[test]
    fn date_bounds() {
        let since = Clause::new("assigned_date", Op::Gte, date(2024, 1, 5));
        assert!(since.matches(&Value::Date(date(2024, 1, 5))));
        assert!(since.matches(&Value::Date(date(2024, 1, 9))));
        assert!(!since.matches(&Value::Date(date(2024, 1, 4))));

        let until = Clause::new("assigned_date", Op::Lt, date(2024, 1, 5));
        assert!(until.matches(&Value::Date(date(2024, 1, 4))));
        assert!(!until.matches(&Value::Date(date(2024, 1, 5))));
    }

    #[test]
    fn text_range() {
        let clause = Clause::new("item", Op::Lt, "M");
        assert!(clause.matches(&Value::String("Dell Monitor")));
        assert!(!clause.matches(&Value::String("Webcam")));
    }

    #[test]
    fn none_value_never_matches() {
        assert!(!Clause::new("item", Op::Eq, "x").matches(&Value::None));
        assert!(!Clause::new("item", Op::Ne, "x").matches(&Value::None));
        assert!(!Clause::new("item", Op::Contains, "").matches(&Value::None));
        assert!(!Clause::new("d", Op::Gte, date(2024, 1, 1)).matches(&Value::None));
    }

    #[test]
    fn type_mismatch_doesnt_match() {
        let clause = Clause::new("assigned_date", Op::Gte, date(2024, 1, 1));
        assert!(!clause.matches(&Value::Number(Number::I64(42))));
        assert!(!clause.matches(&Value::String("2024-02-01")));
    }

    #[test]
    fn parse_date_bound() {
        assert_eq!(
            ClauseValue::parse_date("2024-01-03").unwrap(),
            ClauseValue::Date(date(2024, 1, 3))
        );
        let err = ClauseValue::parse_date("Jan 3").unwrap_err();
        assert!(err.to_string().contains("Jan 3"));
    }
}
