//! View settings.

use std::num::NonZeroUsize;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeekerError};
use crate::pagination::Paginator;

/// Settings shared by every table view.
///
/// Deserializes from a partial document: missing keys take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Rows per page.
    pub page_size: usize,
    /// Quiet interval before search text is applied, in milliseconds.
    pub search_debounce_ms: u64,
    /// Number of page links shown in a pager.
    pub page_window: usize,
}

impl ViewConfig {
    pub const DEFAULT_PAGE_SIZE: usize = 10;
    pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
    pub const DEFAULT_PAGE_WINDOW: usize = 5;

    /// Checks the settings and returns the validated form.
    pub fn validate(&self) -> Result<ValidatedConfig> {
        let page_size = NonZeroUsize::new(self.page_size)
            .ok_or_else(|| SeekerError::config("page_size", "must be at least 1"))?;
        let page_window = NonZeroUsize::new(self.page_window)
            .ok_or_else(|| SeekerError::config("page_window", "must be at least 1"))?;

        Ok(ValidatedConfig {
            page_size,
            page_window,
            search_debounce: Duration::from_millis(self.search_debounce_ms),
        })
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            page_size: Self::DEFAULT_PAGE_SIZE,
            search_debounce_ms: Self::DEFAULT_SEARCH_DEBOUNCE_MS,
            page_window: Self::DEFAULT_PAGE_WINDOW,
        }
    }
}

/// [`ViewConfig`] after validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub page_size: NonZeroUsize,
    pub page_window: NonZeroUsize,
    pub search_debounce: Duration,
}

impl ValidatedConfig {
    /// A paginator using these settings.
    pub fn paginator(&self) -> Paginator {
        Paginator::new(self.page_size, self.page_window)
    }
}
