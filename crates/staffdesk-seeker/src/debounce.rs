//! Trailing-edge debounce for a single value.
//!
//! [`Debounced`] holds a settled value and at most one pending update. The
//! caller owns the clock: every method that cares about time takes `now`, so
//! an event loop can drive it from real [`Instant::now`] readings and tests
//! can step time by hand.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use staffdesk_seeker::Debounced;
//!
//! let start = Instant::now();
//! let mut search = Debounced::new(String::new(), Duration::from_millis(300));
//!
//! search.push("m".to_string(), start);
//! search.push("ma".to_string(), start + Duration::from_millis(100));
//! assert!(search.poll(start + Duration::from_millis(350)).is_none());
//!
//! let settled = search.poll(start + Duration::from_millis(400)).cloned();
//! assert_eq!(settled.as_deref(), Some("ma"));
//! assert_eq!(search.value(), "ma");
//! ```

use std::fmt::Debug;
use std::time::{Duration, Instant};

#[derive(Debug)]
struct Pending<T> {
    value: T,
    due: Instant,
}

/// A value that follows its source only after the source has been quiet for
/// a fixed interval.
#[derive(Debug)]
pub struct Debounced<T: Debug> {
    settled: T,
    pending: Option<Pending<T>>,
    quiet: Duration,
}

impl<T: Debug> Debounced<T> {
    /// Creates a debouncer whose settled value starts as `initial`.
    pub fn new(initial: T, quiet: Duration) -> Self {
        Debounced {
            settled: initial,
            pending: None,
            quiet,
        }
    }

    /// The quiet interval.
    pub fn quiet(&self) -> Duration {
        self.quiet
    }

    /// Records a new source value and restarts the timer.
    ///
    /// Returns `true` if the value settled right away, which only happens
    /// with a zero interval.
    pub fn push(&mut self, value: T, now: Instant) -> bool {
        if self.quiet.is_zero() {
            log::trace!("debounce: zero interval, settling {:?}", value);
            self.pending = None;
            self.settled = value;
            return true;
        }

        let due = now + self.quiet;
        if let Some(previous) = self.pending.replace(Pending { value, due }) {
            log::trace!("debounce: superseded {:?}", previous.value);
        }
        false
    }

    /// Settles the pending value if its deadline has passed.
    ///
    /// Returns the newly settled value exactly once per settle, and `None`
    /// while nothing is pending or the deadline is still ahead.
    pub fn poll(&mut self, now: Instant) -> Option<&T> {
        match &self.pending {
            Some(pending) if now >= pending.due => {}
            _ => return None,
        }
        self.flush()
    }

    /// Settles a pending value immediately, ignoring the deadline.
    pub fn flush(&mut self) -> Option<&T> {
        let pending = self.pending.take()?;
        log::trace!("debounce: settled {:?}", pending.value);
        self.settled = pending.value;
        Some(&self.settled)
    }

    /// Discards a pending update. The settled value is unchanged.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::trace!("debounce: cancelled {:?}", pending.value);
        }
    }

    /// The current settled value.
    pub fn value(&self) -> &T {
        &self.settled
    }

    /// The latest source value, pending or settled.
    pub fn latest(&self) -> &T {
        self.pending
            .as_ref()
            .map(|p| &p.value)
            .unwrap_or(&self.settled)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value will settle, if there is one.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// How long an event loop may sleep before the next [`poll`](Self::poll)
    /// could settle something. `None` when nothing is pending.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline().map(|due| due.saturating_duration_since(now))
    }
}

impl<T: Debug> Drop for Debounced<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}
