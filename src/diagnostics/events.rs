// SPDX-License-Identifier: MPL-2.0
//! Scheduling event types for activity tracking.
//!
//! Every observable scheduler decision (display, queuing, preemption,
//! suppression, eviction) is recorded as one of these events so the
//! quiet failure modes (dropped duplicates, overflow eviction, replaced
//! interrupted toasts) stay diagnosable.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::toasts::Priority;

/// A single scheduler decision worth recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToastEventKind {
    /// A toast took the display slot.
    Shown { id: u64, priority: Priority },

    /// A toast joined the pending queue at the given depth.
    Queued { id: u64, depth: usize },

    /// The oldest pending toast was evicted to make room for a new one.
    QueueOverflow { evicted: u64 },

    /// A request was dropped because its message was already tracked.
    DuplicateSuppressed { message: String },

    /// The displayed toast was displaced by a high-priority arrival,
    /// keeping `remaining_ms` of visible lifetime for later.
    Preempted { id: u64, remaining_ms: u64 },

    /// A second preemption displaced the toast already held in the
    /// interrupted slot; the earlier occupant is gone.
    InterruptedReplaced { dropped: u64 },

    /// A previously preempted toast returned to the display slot.
    Resumed { id: u64, remaining_ms: u64 },

    /// An action callback panicked while being invoked.
    ActionFailed { id: u64, detail: String },

    /// Everything was dropped by a clear-all request.
    Cleared,
}

/// A timestamped scheduler event.
#[derive(Debug, Clone)]
pub struct ToastEvent {
    /// When the event occurred (monotonic).
    pub timestamp: Instant,
    /// What happened.
    pub kind: ToastEventKind,
}

impl ToastEvent {
    /// Creates an event stamped with the current instant.
    #[must_use]
    pub fn new(kind: ToastEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_kind_serializes_with_type_tag() {
        let kind = ToastEventKind::Shown {
            id: 7,
            priority: Priority::High,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");

        assert!(json.contains("\"type\":\"shown\""));
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"priority\":\"high\""));
    }

    #[test]
    fn event_kind_deserializes_from_json() {
        let json = r#"{"type":"queue_overflow","evicted":3}"#;
        let kind: ToastEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");

        assert_eq!(kind, ToastEventKind::QueueOverflow { evicted: 3 });
    }

    #[test]
    fn unit_variant_round_trips() {
        let json = serde_json::to_string(&ToastEventKind::Cleared).expect("serialize");
        let kind: ToastEventKind = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(kind, ToastEventKind::Cleared);
    }

    #[test]
    fn new_stamps_a_timestamp() {
        let before = Instant::now();
        let event = ToastEvent::new(ToastEventKind::Cleared);
        assert!(event.timestamp >= before);
    }
}
