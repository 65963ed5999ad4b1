//! Trailing-edge debounce for input events.
//!
//! Only the input path is debounced. The host reports each input with its timestamp and polls;
//! the input handler fires once `delay` has passed without a newer input. The debouncer holds
//! no text: the handler reads the input when it fires, so edits made in between (including
//! clearing the input) are what the engine sees. A zero delay fires on every input.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
/// Holds back the input handler until the delay elapses.
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    /// Creates a debouncer with the given delay.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    #[must_use]
    /// True when the delay is zero and inputs pass straight through.
    pub fn is_passthrough(&self) -> bool {
        self.delay.is_zero()
    }

    /// Record an input at `now`. Returns true if the handler should run straight away, which
    /// only happens when debouncing is disabled; otherwise restarts the delay.
    pub fn push(&mut self, now: Instant) -> bool {
        if self.is_passthrough() {
            return true;
        }
        self.deadline = Some(now + self.delay);
        false
    }

    /// Returns true, once, when the pending deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self.deadline.is_some_and(|deadline| now >= deadline);
        if due {
            self.deadline = None;
        }
        due
    }

    #[must_use]
    /// When the pending input becomes due, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
#[path = "tests/debounce.rs"]
mod tests;
