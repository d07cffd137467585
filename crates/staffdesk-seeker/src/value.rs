//! Field values as records hand them to the query engine.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// A field value, borrowed from its record. One variant per
/// [`FieldKind`](crate::FieldKind), plus `None` for absent values.
///
/// ```
/// use staffdesk_seeker::{Value, Number};
///
/// struct Asset {
///     item: String,
///     cost: Option<f64>,
/// }
///
/// fn accessor<'a>(asset: &'a Asset, field: &str) -> Value<'a> {
///     match field {
///         "item" => Value::String(&asset.item),
///         "cost" => asset.cost.map(Value::from).unwrap_or(Value::None),
///         _ => Value::None,
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    String(&'a str),
    Number(Number),
    Date(NaiveDate),
    /// Stable token of an enumerated variant, e.g. `"active"`.
    Enum(&'static str),
    /// Field absent, optional and unset, or unknown to the record.
    None,
}

impl<'a> Value<'a> {
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Text of `String` and `Enum` values.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            Value::Enum(token) => Some(token),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Exact, case-sensitive comparison against the value's display form.
    ///
    /// This is what column filters use: `"active"` matches the `active`
    /// token but not `"Active"`. A `None` value matches nothing.
    pub fn matches_token(&self, token: &str) -> bool {
        match self {
            Value::String(s) => *s == token,
            Value::Enum(t) => *t == token,
            Value::Number(n) => n.to_string() == token,
            Value::Date(d) => d.format(DATE_FORMAT).to_string() == token,
            Value::None => false,
        }
    }

    /// Case-insensitive substring test. `needle` must already be lowercase.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        match self.as_str() {
            Some(haystack) => haystack.to_lowercase().contains(needle),
            None => false,
        }
    }
}

/// Date format used for display, filtering and export.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Enum(t) => f.write_str(t),
            Value::Number(n) => write!(f, "{}", n),
            Value::Date(d) => write!(f, "{}", d.format(DATE_FORMAT)),
            Value::None => Ok(()),
        }
    }
}

impl From<NaiveDate> for Value<'_> {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(Number::F64(n))
    }
}

impl From<u32> for Value<'_> {
    fn from(n: u32) -> Self {
        Value::Number(Number::U64(n as u64))
    }
}

/// A number as the record stores it.
///
/// Integers keep their exact value; mixed comparisons fall back to `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Orders two numbers of any variants. `None` if either is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        use Number::*;
        match (self, other) {
            (I64(a), I64(b)) => Some(a.cmp(&b)),
            (U64(a), U64(b)) => Some(a.cmp(&b)),
            (I64(a), U64(b)) => Some(u64::try_from(a).map_or(Ordering::Less, |a| a.cmp(&b))),
            (U64(a), I64(b)) => Some(u64::try_from(b).map_or(Ordering::Greater, |b| a.cmp(&b))),
            _ => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => fmt::Display::fmt(n, f),
            Number::U64(n) => fmt::Display::fmt(n, f),
            Number::F64(n) => fmt::Display::fmt(n, f),
        }
    }
}

macro_rules! number_from {
    ($($ty:ty => $variant:ident as $wide:ty),* $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )*
    };
}

number_from! {
    i32 => I64 as i64,
    i64 => I64 as i64,
    u32 => U64 as u64,
    u64 => U64 as u64,
    usize => U64 as u64,
    f64 => F64 as f64,
}
