// Copyright 2026 the ScatterGL Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancel-and-reschedule debouncing.
//!
//! A [`ResizeDebouncer`] holds at most one pending deadline. Every signal replaces it, so a
//! burst of resize events settles into a single firing once the host has been quiet for the
//! configured delay.
//!
//! ```
//! use std::time::Duration;
//! use scattergl::ResizeDebouncer;
//! use web_time::Instant;
//!
//! let start = Instant::now();
//! let mut debouncer = ResizeDebouncer::new(Duration::from_millis(500));
//! debouncer.signal(start);
//! debouncer.signal(start + Duration::from_millis(300));
//!
//! assert!(!debouncer.poll(start + Duration::from_millis(700)));
//! assert!(debouncer.poll(start + Duration::from_millis(800)));
//! assert!(!debouncer.is_pending());
//! ```

use std::time::Duration;

use web_time::Instant;

/// A single cancellable deadline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeDebouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl ResizeDebouncer {
    /// The quiet period used by [`ResizeDebouncer::default`].
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    /// Creates an idle debouncer with the given quiet period.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// The quiet period.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The instant the pending deadline expires, if one is scheduled.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a deadline is scheduled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Cancels any pending deadline and schedules a new one `delay` after `now`.
    ///
    /// Returns `true` if a pending deadline was cancelled.
    pub fn signal(&mut self, now: Instant) -> bool {
        let deadline = now.checked_add(self.delay).unwrap_or(now);
        self.deadline.replace(deadline).is_some()
    }

    /// Returns `true` exactly once when the pending deadline has passed at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops the pending deadline. Returns `true` if there was one.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }
}

impl Default for ResizeDebouncer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}
