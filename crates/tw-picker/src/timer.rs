//! One-deadline timer with last-event-wins replacement.
//!
//! The protocol needs two kinds of waiting: the per-wheel debounce window
//! and the selector's settle delay after opening. Both are modeled by
//! [`DebounceTimer`], a passive deadline holder: it never fires on its own,
//! only when [`poll`](DebounceTimer::poll) observes that the deadline has
//! passed. Dropping the owner therefore cannot produce a late firing.
//!
//! At most one deadline is pending at a time; [`restart`](DebounceTimer::restart)
//! replaces any existing deadline, which is exactly the last-event-wins rule
//! for scroll streams.

use std::time::{Duration, Instant};

/// A cancellable single-deadline timer.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use tw_picker::DebounceTimer;
///
/// let mut timer = DebounceTimer::new();
/// let t0 = Instant::now();
///
/// timer.restart(t0, Duration::from_millis(150));
/// assert!(!timer.poll(t0 + Duration::from_millis(100)));
/// assert!(timer.poll(t0 + Duration::from_millis(150)));
/// // Fires exactly once.
/// assert!(!timer.poll(t0 + Duration::from_millis(200)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceTimer {
    deadline: Option<Instant>,
}

impl DebounceTimer {
    /// Creates a disarmed timer.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arms the timer to fire `window` after `now`, replacing any pending
    /// deadline.
    pub fn restart(&mut self, now: Instant, window: Duration) {
        self.deadline = Some(now + window);
    }

    /// Cancels the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` if a deadline is pending.
    #[inline]
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` exactly once when the deadline has passed, disarming
    /// the timer.
    ///
    /// A deadline equal to `now` counts as passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
