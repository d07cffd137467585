//! Queries: clause groups plus an optional sort.

use crate::clause::{Clause, ClauseValue};
use crate::op::Op;
use crate::ordering::{sort_by_spec, Dir, SortSpec};
use crate::traits::Seekable;

/// How the clauses of one group combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Every clause must hold.
    All,
    /// At least one clause must hold. An empty group holds.
    Any,
    /// No clause may hold.
    None,
}

/// A filter over a record collection, with an optional sort.
///
/// A record matches when all three groups hold:
///
/// ```text
/// all(AND) ∧ (OR is empty ∨ any(OR)) ∧ ¬any(NOT)
/// ```
///
/// Column filters go in the AND group and search terms in the OR group, so
/// a search term only has to hit one of the searchable columns.
///
/// ```
/// use staffdesk_seeker::{Dir, Query};
///
/// // Active assets whose item or assignee mentions "mac", newest first.
/// let query = Query::new()
///     .and_eq("status", "active")
///     .or_contains("item", "mac")
///     .or_contains("assigned_to", "mac")
///     .not_eq("condition", "poor")
///     .order_by("assigned_date", Dir::Desc);
/// assert_eq!(query.and_clauses().len(), 1);
/// assert_eq!(query.or_clauses().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    all: Vec<Clause>,
    any: Vec<Clause>,
    none: Vec<Clause>,
    sort: Option<SortSpec>,
}

impl Query {
    /// A query with no clauses matches every record.
    pub fn new() -> Self {
        Query::default()
    }

    /// Adds a clause to `group`.
    pub fn push(mut self, group: Group, clause: Clause) -> Self {
        match group {
            Group::All => self.all.push(clause),
            Group::Any => self.any.push(clause),
            Group::None => self.none.push(clause),
        }
        self
    }

    pub fn and(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.push(Group::All, Clause::new(field, op, value))
    }

    pub fn or(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.push(Group::Any, Clause::new(field, op, value))
    }

    pub fn not(self, field: &str, op: Op, value: impl Into<ClauseValue>) -> Self {
        self.push(Group::None, Clause::new(field, op, value))
    }

    pub fn and_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Eq, value)
    }

    pub fn and_ne(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Ne, value)
    }

    /// Lower bound, inclusive.
    pub fn and_gte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Gte, value)
    }

    /// Upper bound, inclusive.
    pub fn and_lte(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.and(field, Op::Lte, value)
    }

    pub fn or_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.or(field, Op::Eq, value)
    }

    /// Search term for one column. Case-insensitive.
    pub fn or_contains(self, field: &str, value: &str) -> Self {
        self.or(field, Op::Contains, value)
    }

    pub fn not_eq(self, field: &str, value: impl Into<ClauseValue>) -> Self {
        self.not(field, Op::Eq, value)
    }

    /// Sorts by one column, replacing any earlier sort.
    pub fn order_by(self, field: &str, dir: Dir) -> Self {
        self.sorted(Some(SortSpec::new(field, dir)))
    }

    pub fn sorted(mut self, sort: Option<SortSpec>) -> Self {
        self.sort = sort;
        self
    }

    pub fn clauses(&self, group: Group) -> &[Clause] {
        match group {
            Group::All => &self.all,
            Group::Any => &self.any,
            Group::None => &self.none,
        }
    }

    pub fn and_clauses(&self) -> &[Clause] {
        self.clauses(Group::All)
    }

    pub fn or_clauses(&self) -> &[Clause] {
        self.clauses(Group::Any)
    }

    pub fn not_clauses(&self) -> &[Clause] {
        self.clauses(Group::None)
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// True when there are no clauses. The sort doesn't count.
    pub fn is_empty(&self) -> bool {
        [Group::All, Group::Any, Group::None]
            .iter()
            .all(|g| self.clauses(*g).is_empty())
    }

    pub fn matches<T: Seekable>(&self, item: &T) -> bool {
        let holds = |clause: &Clause| clause.matches(&item.seeker_field_value(&clause.field));

        self.all.iter().all(holds)
            && (self.any.is_empty() || self.any.iter().any(holds))
            && !self.none.iter().any(holds)
    }

    /// Matching records, sorted when a sort is set and in input order
    /// otherwise.
    pub fn filter<'a, T: Seekable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let hits: Vec<&'a T> = items.iter().filter(|item| self.matches(*item)).collect();
        match &self.sort {
            Some(sort) => sort_by_spec(hits, sort, T::schema(), &T::accessor),
            None => hits,
        }
    }

    pub fn count<T: Seekable>(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(*item)).count()
    }

    /// First match in input order. The sort is ignored.
    pub fn find<'a, T: Seekable>(&self, items: &'a [T]) -> Option<&'a T> {
        items.iter().find(|item| self.matches(*item))
    }
}
