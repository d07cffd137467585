//! Ordering types for view sorting.
//!
//! Provides [`Dir`] for sort direction, [`SortSpec`] for the single-column
//! sort a table view carries, and the comparison used for each declared
//! [`FieldKind`].

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::schema::{FieldKind, Schema};
use crate::value::{Number, Value};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Returns `true` if this is ascending order.
    pub fn is_asc(self) -> bool {
        matches!(self, Dir::Asc)
    }

    /// Returns the opposite direction.
    pub fn toggled(self) -> Dir {
        match self {
            Dir::Asc => Dir::Desc,
            Dir::Desc => Dir::Asc,
        }
    }

    /// Applies this direction to an ordering.
    ///
    /// `Desc` is the exact reverse of `Asc`, so equal keys stay equal and a
    /// stable sort keeps their original order in both directions.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The sort applied to a view: one field and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// The field to sort by.
    pub field: String,
    /// The sort direction.
    pub dir: Dir,
}

impl SortSpec {
    /// Creates a new ascending sort for the given field.
    pub fn asc(field: impl Into<String>) -> Self {
        SortSpec::new(field, Dir::Asc)
    }

    /// Creates a new descending sort for the given field.
    pub fn desc(field: impl Into<String>) -> Self {
        SortSpec::new(field, Dir::Desc)
    }

    /// Creates a new sort with the given direction.
    pub fn new(field: impl Into<String>, dir: Dir) -> Self {
        SortSpec {
            field: field.into(),
            dir,
        }
    }
}

/// Collation key for text: transliterated to ASCII, then lowercased.
///
/// This gives accent- and case-insensitive ordering ("émilie" sorts with
/// "Emily") without depending on a platform locale. It is an approximation
/// of locale collation: after transliteration, punctuation and digits order
/// by their ASCII code, so `"a~"` sorts after `"ab"` where a locale collator
/// would put it first.
pub fn collation_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// A precomputed sort key for one record.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SortKey {
    Text(String),
    Number(Number),
    Date(chrono::NaiveDate),
    /// Field missing, wrong type, NaN, or unknown to the schema.
    Neutral,
}

impl SortKey {
    /// Builds the key for a value given the field's declared kind.
    pub(crate) fn new(kind: Option<FieldKind>, value: &Value<'_>) -> SortKey {
        match (kind, value) {
            (Some(FieldKind::Text | FieldKind::Enum(_)), v) => match v.as_str() {
                Some(s) => SortKey::Text(collation_key(s)),
                None => SortKey::Neutral,
            },
            (Some(FieldKind::Number), Value::Number(n)) if !n.to_f64().is_nan() => {
                SortKey::Number(*n)
            }
            (Some(FieldKind::Date), Value::Date(d)) => SortKey::Date(*d),
            _ => SortKey::Neutral,
        }
    }

    pub(crate) fn is_neutral(&self) -> bool {
        matches!(self, SortKey::Neutral)
    }

    /// Ascending comparison. Keys built for one field share a variant and
    /// are totally ordered; anything involving a neutral key compares
    /// `Equal`.
    pub(crate) fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Number(a), SortKey::Number(b)) => a.compare(*b).unwrap_or(Ordering::Equal),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Sorts `items` by `spec`, using the comparison declared for the field in
/// `schema`.
///
/// Records with a neutral key (no value for the field) stay in the slot they
/// started in. The remaining records are stably sorted among the other
/// slots, so the keyed rows always come out in order and equal keys keep
/// their input order in both directions. A field the schema doesn't declare
/// leaves the input order untouched.
pub(crate) fn sort_by_spec<'r, T, F>(
    items: Vec<&'r T>,
    spec: &SortSpec,
    schema: &Schema,
    accessor: &F,
) -> Vec<&'r T>
where
    for<'a> F: Fn(&'a T, &str) -> Value<'a>,
{
    let kind = schema.field(&spec.field).map(|f| f.kind);
    if kind.is_none() {
        log::debug!("sort field '{}' not in schema, keeping input order", spec.field);
        return items;
    }

    let keys: Vec<SortKey> = items
        .iter()
        .map(|&item| SortKey::new(kind, &accessor(item, &spec.field)))
        .collect();

    let mut keyed: Vec<(&SortKey, &'r T)> = keys
        .iter()
        .zip(items.iter().copied())
        .filter(|(key, _)| !key.is_neutral())
        .collect();
    keyed.sort_by(|a, b| spec.dir.apply(a.0.compare(b.0)));

    let mut sorted = keyed.into_iter().map(|(_, item)| item);
    let mut out = Vec::with_capacity(items.len());
    for (key, item) in keys.iter().zip(items) {
        if key.is_neutral() {
            out.push(item);
        } else {
            out.extend(sorted.next());
        }
    }
    out
}
