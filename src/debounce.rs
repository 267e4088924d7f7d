// SPDX-License-Identifier: PMPL-1.0-or-later

//! Cancellable deferred evaluation for search input
//!
//! Each keystroke schedules an evaluation a short interval into the
//! future; a newer keystroke replaces the pending one. The event loop
//! polls [`Debouncer::ready`] and runs the filter pass only once typing
//! pauses. Times are passed in explicitly so the semantics are testable
//! without sleeping.

use std::time::{Duration, Instant};

/// Default delay between the last keystroke and filter evaluation.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule (or reschedule) the evaluation `delay` after `now`.
    /// Replaces any pending deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True while an evaluation is pending.
    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// If the pending deadline has passed, clear it and report true.
    /// At most one `true` per scheduled deadline.
    pub fn ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending evaluation.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
