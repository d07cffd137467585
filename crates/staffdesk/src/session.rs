//! Interactive table session.
//!
//! A [`Session`] is everything the browser screen knows about one table:
//! the query inputs, the search box (debounced), and the pager. It performs
//! no I/O. The caller feeds it [`Action`]s and clock ticks and draws whatever
//! [`Session::snapshot`] returns.

use std::time::{Duration, Instant};

use staffdesk_seeker::{
    compute_view, Debounced, Page, Paginator, QueryState, Seekable, ValidatedConfig,
};

/// Something the user did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the search box.
    Type(char),
    /// Delete the last character of the search box.
    Backspace,
    /// Empty the search box and apply that at once.
    ClearSearch,
    /// Step an enumerated column through its filter values.
    CycleFilter(&'static str),
    /// Sort by a column, or flip it if it is already the sort column.
    SortBy(&'static str),
    NextPage,
    PreviousPage,
    /// Jump to a page; out-of-range values are clamped on the next snapshot.
    GoToPage(usize),
    /// Clear search, filters and sort.
    Reset,
}

/// What to draw.
#[derive(Debug)]
pub struct Snapshot<'a, T> {
    pub rows: Vec<&'a T>,
    pub page: Page,
}

pub struct Session<'a, T: Seekable> {
    records: &'a [T],
    state: QueryState,
    search: Debounced<String>,
    paginator: Paginator,
}

impl<'a, T: Seekable> Session<'a, T> {
    pub fn new(records: &'a [T], config: &ValidatedConfig) -> Self {
        Session {
            records,
            state: QueryState::new(config.page_size),
            search: Debounced::new(String::new(), config.search_debounce),
            paginator: config.paginator(),
        }
    }

    /// Applies an action.
    ///
    /// Edits to the search box only reach the query once they settle, see
    /// [`tick`](Self::tick). Everything else applies immediately.
    pub fn handle(&mut self, action: Action, now: Instant) {
        log::trace!("action {:?}", action);
        match action {
            Action::Type(c) => {
                let mut text = self.search.latest().clone();
                text.push(c);
                self.push_search(text, now);
            }
            Action::Backspace => {
                let mut text = self.search.latest().clone();
                if text.pop().is_some() {
                    self.push_search(text, now);
                }
            }
            Action::ClearSearch => self.settle_search(String::new(), now),
            Action::CycleFilter(field) => {
                match T::schema().field(field).and_then(|f| f.kind.choices()) {
                    Some(choices) => {
                        let value = self.state.cycle_filter(field, choices);
                        log::debug!("filter {} = {}", field, value);
                    }
                    None => log::warn!("{} is not a filterable column", field),
                }
            }
            Action::SortBy(field) => self.state.set_sort(field),
            Action::NextPage => self.state.set_page(self.state.page().saturating_add(1)),
            Action::PreviousPage => self.state.set_page(self.state.page().saturating_sub(1)),
            Action::GoToPage(n) => self.state.set_page(n),
            Action::Reset => {
                self.settle_search(String::new(), now);
                self.state.reset_all();
            }
        }
    }

    /// Lets a pending search settle. Returns `true` when the query changed
    /// and the screen needs redrawing.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.search.poll(now) {
            Some(text) => {
                log::debug!("search settled on {:?}", text);
                self.state.set_search_text(text.clone());
                true
            }
            None => false,
        }
    }

    /// Runs the pipeline for the current state and writes the clamped page
    /// back, so paging forward from the last page stays on it.
    pub fn snapshot(&mut self) -> Snapshot<'a, T> {
        let view = compute_view(
            self.records,
            self.state.search_text(),
            self.state.filters(),
            self.state.sort(),
        );
        let page = self.paginator.paginate(view.match_count, self.state.page());
        self.state.clamp_page(page.total_pages);

        Snapshot {
            rows: page.slice(&view.rows).to_vec(),
            page,
        }
    }

    /// Abandons a pending search edit.
    pub fn quit(&mut self) {
        self.search.cancel();
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// The search box contents, including keystrokes that have not settled.
    pub fn typed_text(&self) -> &str {
        self.search.latest()
    }

    pub fn is_search_pending(&self) -> bool {
        self.search.is_pending()
    }

    /// How long the event loop may wait for input before calling
    /// [`tick`](Self::tick). `None` means wait indefinitely.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.search.time_until_due(now)
    }

    fn push_search(&mut self, text: String, now: Instant) {
        if self.search.push(text, now) {
            let settled = self.search.value().clone();
            self.state.set_search_text(settled);
        }
    }

    fn settle_search(&mut self, text: String, now: Instant) {
        self.search.push(text, now);
        if let Some(text) = self.search.flush() {
            let text = text.clone();
            self.state.set_search_text(text);
        }
    }
}
