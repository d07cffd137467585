//! The view pipeline: records plus query inputs in, filtered and sorted rows
//! out.
//!
//! [`compute_view`] is a pure function. The caller invokes it whenever any of
//! its inputs changed and slices the result with a
//! [`Paginator`](crate::Paginator); `match_count` always reflects the full
//! filtered set, whatever page is on screen.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ordering::SortSpec;
use crate::query::Query;
use crate::traits::Seekable;

/// The value selected for one column filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterValue {
    /// No constraint on this column.
    #[default]
    All,
    /// The column must equal this value exactly.
    Is(String),
}

impl FilterValue {
    /// The sentinel spelling of [`FilterValue::All`].
    pub const ALL: &'static str = "all";

    /// Parses a filter selection, treating `"all"` as the sentinel.
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL {
            FilterValue::All
        } else {
            FilterValue::Is(value.to_string())
        }
    }

    /// Returns `true` for the sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }

    /// The constrained value, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            FilterValue::All => None,
            FilterValue::Is(v) => Some(v),
        }
    }
}

impl std::fmt::Display for FilterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.value().unwrap_or(Self::ALL))
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::parse(value)
    }
}

/// Result of the view pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct View<'a, T> {
    /// Every matching record, sorted, not paginated.
    pub rows: Vec<&'a T>,
    /// Number of records that passed the filter stage.
    pub match_count: usize,
}

impl<T> View<'_, T> {
    /// A view with no rows.
    pub fn empty() -> Self {
        View {
            rows: Vec::new(),
            match_count: 0,
        }
    }

    /// Returns `true` if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.match_count == 0
    }
}

/// Translates view inputs into a [`Query`].
///
/// Non-`All` filters become AND equality clauses. A non-empty search becomes
/// an OR group of case-insensitive `Contains` clauses, one per searchable
/// field of `T`'s schema.
pub fn view_query<T: Seekable>(
    search: &str,
    filters: &BTreeMap<String, FilterValue>,
    sort: Option<&SortSpec>,
) -> Query {
    let mut query = filters
        .iter()
        .filter_map(|(field, value)| value.value().map(|v| (field, v)))
        .fold(Query::new(), |query, (field, value)| query.and_eq(field, value));

    if !search.is_empty() {
        query = T::schema()
            .searchable()
            .fold(query, |query, field| query.or_contains(field.name, search));
    }

    query.sorted(sort.cloned())
}

/// Runs the filter and sort stages over `records`.
///
/// - A record is kept when every non-`All` filter equals its field exactly
///   and, for a non-empty `search`, at least one searchable field contains it
///   ignoring case.
/// - With a sort, rows are stably ordered by the field's declared kind;
///   without one they keep collection order.
///
/// Never fails: unknown sort fields are neutral and unknown filter values
/// simply match nothing.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use staffdesk_seeker::{compute_view, FieldDef, FieldKind, FilterValue, Schema, Seekable, Value};
///
/// struct Asset { item: &'static str, status: &'static str }
///
/// static ASSET: Schema = Schema::new(&[
///     FieldDef::new("item", "Item", FieldKind::Text).searchable(),
///     FieldDef::new("status", "Status", FieldKind::Enum(&["active", "returned"])),
/// ]);
///
/// impl Seekable for Asset {
///     fn schema() -> &'static Schema { &ASSET }
///     fn seeker_field_value(&self, field: &str) -> Value<'_> {
///         match field {
///             "item" => Value::String(self.item),
///             "status" => Value::Enum(self.status),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let assets = [
///     Asset { item: "A", status: "active" },
///     Asset { item: "B", status: "returned" },
///     Asset { item: "C", status: "active" },
/// ];
/// let mut filters = BTreeMap::new();
/// filters.insert("status".to_string(), FilterValue::parse("active"));
///
/// let view = compute_view(&assets, "", &filters, None);
/// assert_eq!(view.match_count, 2);
/// assert_eq!(view.rows[1].item, "C");
/// ```
pub fn compute_view<'a, T: Seekable>(
    records: &'a [T],
    search: &str,
    filters: &BTreeMap<String, FilterValue>,
    sort: Option<&SortSpec>,
) -> View<'a, T> {
    if !search.is_empty() && T::schema().searchable().next().is_none() {
        log::debug!("search '{}' on a schema without searchable fields", search);
        return View::empty();
    }

    let rows = view_query::<T>(search, filters, sort).filter(records);
    let match_count = rows.len();

    log::debug!(
        "view recomputed: {} of {} records match (search={:?}, sort={:?})",
        match_count,
        records.len(),
        search,
        sort.map(|s| format!("{}:{}", s.field, s.dir)),
    );

    View { rows, match_count }
}
