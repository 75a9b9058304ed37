// SPDX-License-Identifier: MPL-2.0
//! Cancellable dismissal timer handle.
//!
//! Exactly one timer is armed at any moment, scoped to whichever toast
//! occupies the display slot. Arming always follows cancellation of the
//! prior handle, so a stale deadline can never fire: cancellation drops the
//! handle, and the generation tag distinguishes one arming from the next.

use std::time::{Duration, Instant};

/// An armed dismissal deadline for the currently displayed toast.
///
/// The timer does not run on its own thread; expiry is detected by the
/// periodic tick comparing the deadline against the injected `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    generation: u64,
    deadline: Instant,
}

impl DismissTimer {
    pub(crate) fn arm(generation: u64, duration: Duration, now: Instant) -> Self {
        Self {
            generation,
            deadline: now + duration,
        }
    }

    /// Returns the arming sequence number. Each arming gets a fresh one.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the instant at which the toast should be dismissed.
    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Returns whether the deadline has passed at `now`.
    #[must_use]
    pub fn is_elapsed(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Returns the time left before expiry, zero if already elapsed.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline.saturating_duration_since(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timer_elapses_at_deadline() {
        let start = Instant::now();
        let timer = DismissTimer::arm(1, Duration::from_secs(5), start);

        assert!(!timer.is_elapsed(start));
        assert!(!timer.is_elapsed(start + Duration::from_millis(4999)));
        assert!(timer.is_elapsed(start + Duration::from_secs(5)));
        assert!(timer.is_elapsed(start + Duration::from_secs(6)));
    }

    #[test]
    fn remaining_counts_down_and_saturates() {
        let start = Instant::now();
        let timer = DismissTimer::arm(1, Duration::from_secs(5), start);

        assert_eq!(timer.remaining(start), Duration::from_secs(5));
        assert_eq!(
            timer.remaining(start + Duration::from_secs(2)),
            Duration::from_secs(3)
        );
        assert_eq!(
            timer.remaining(start + Duration::from_secs(9)),
            Duration::ZERO
        );
    }

    #[test]
    fn generations_distinguish_armings() {
        let start = Instant::now();
        let first = DismissTimer::arm(1, Duration::from_secs(5), start);
        let second = DismissTimer::arm(2, Duration::from_secs(5), start);
        assert_ne!(first.generation(), second.generation());
    }
}
