//! Mutable query inputs for one table view.
//!
//! [`QueryState`] is the single owner of search text, filters, sort and page.
//! Every mutation that can shrink the result set sends the user back to the
//! first page, so a narrowed view never opens on a page that no longer
//! exists.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use serde::Serialize;

use crate::ordering::{Dir, SortSpec};
use crate::view::FilterValue;

/// Query inputs of a table view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    search_text: String,
    filters: BTreeMap<String, FilterValue>,
    sort: Option<SortSpec>,
    page: usize,
    page_size: NonZeroUsize,
}

impl QueryState {
    /// Fresh state: no search, no filters, insertion order, page 1.
    pub fn new(page_size: NonZeroUsize) -> Self {
        QueryState {
            search_text: String::new(),
            filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size,
        }
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Replaces the search text and returns to page 1.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.page = 1;
    }

    /// Sets one column filter and returns to page 1.
    ///
    /// Setting [`FilterValue::All`] removes the constraint.
    pub fn set_filter(&mut self, field: impl Into<String>, value: FilterValue) {
        let field = field.into();
        if value.is_all() {
            self.filters.remove(&field);
        } else {
            self.filters.insert(field, value);
        }
        self.page = 1;
    }

    /// Sorts by `field`.
    ///
    /// Choosing the current sort field flips its direction and stays on the
    /// same page. Choosing a different field sorts it ascending from page 1.
    pub fn set_sort(&mut self, field: &str) {
        match &mut self.sort {
            Some(sort) if sort.field == field => {
                sort.dir = sort.dir.toggled();
            }
            _ => {
                self.sort = Some(SortSpec::new(field, Dir::Asc));
                self.page = 1;
            }
        }
    }

    /// Replaces the sort outright, for a view restored from command-line
    /// flags rather than built up by clicks.
    pub fn set_sort_spec(&mut self, sort: Option<SortSpec>) {
        self.sort = sort;
        self.page = 1;
    }

    /// Requests a page. Values below 1 become 1; the upper bound is applied
    /// later by [`clamp_page`](Self::clamp_page).
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Clears search, filters and sort, and returns to page 1.
    pub fn reset_all(&mut self) {
        self.search_text.clear();
        self.filters.clear();
        self.sort = None;
        self.page = 1;
    }

    /// Writes back the clamped page once the number of pages is known.
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    /// Steps an enumerated filter through `All`, then each of `choices` in
    /// order, then back to `All`. Returns the new value.
    ///
    /// A current value outside `choices` restarts the cycle at `All`.
    pub fn cycle_filter(&mut self, field: &str, choices: &[&str]) -> FilterValue {
        let current = self.filter(field);
        let next = match current.value() {
            None => choices.first().map(|c| FilterValue::parse(c)),
            Some(value) => choices
                .iter()
                .position(|c| *c == value)
                .and_then(|i| choices.get(i + 1))
                .map(|c| FilterValue::parse(c)),
        }
        .unwrap_or_default();

        self.set_filter(field, next.clone());
        next
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// The filter on `field`, [`FilterValue::All`] if none is set.
    pub fn filter(&self, field: &str) -> FilterValue {
        self.filters.get(field).cloned().unwrap_or_default()
    }

    /// All filters, keyed by field name. Only non-`All` values are stored.
    pub fn filters(&self) -> &BTreeMap<String, FilterValue> {
        &self.filters
    }

    /// Filters that constrain the view, in field order.
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter_map(|(field, value)| value.value().map(|v| (field.as_str(), v)))
    }

    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Returns `true` when nothing narrows or reorders the view.
    pub fn is_pristine(&self) -> bool {
        self.search_text.is_empty() && self.filters.is_empty() && self.sort.is_none()
    }
}
