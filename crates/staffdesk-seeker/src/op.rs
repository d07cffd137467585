//! Clause operators.

use std::cmp::Ordering;

/// How a clause compares a field against its value.
///
/// `Eq` and `Ne` compare the display form of the field exactly, which is how
/// column filters behave. `Contains` is the free-text search test: a
/// case-insensitive substring match on text and enum fields. The four
/// ordering operators apply to numbers and dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Eq,
    Ne,
    Contains,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Op {
    /// Whether this operator decides by ordering rather than by token.
    pub fn is_ordering(self) -> bool {
        matches!(self, Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Decides a comparison from `field.cmp(value)`.
    pub fn accepts(self, ordering: Ordering) -> bool {
        use Ordering::*;
        match (self, ordering) {
            (Op::Eq, Equal) => true,
            (Op::Ne, Less | Greater) => true,
            (Op::Gt, Greater) | (Op::Lt, Less) => true,
            (Op::Gte, Greater | Equal) | (Op::Lte, Less | Equal) => true,
            _ => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::Contains => "contains",
            Op::Gt => "gt",
            Op::Gte => "gte",
            Op::Lt => "lt",
            Op::Lte => "lte",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
