// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing scheduler events.
//!
//! The collector receives events from the scheduler through a bounded
//! channel and stores them in a circular buffer. Drain it on each UI tick
//! with [`DiagnosticsCollector::process_pending`].

use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};
use serde::Serialize;

use super::buffer::{BufferCapacity, CircularBuffer};
use super::events::{ToastEvent, ToastEventKind};

/// Default channel capacity for event buffering.
/// This allows some buffering without excessive memory usage.
const DEFAULT_CHANNEL_CAPACITY: usize = 100;

/// Handle for sending scheduler events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<ToastEvent>,
}

impl DiagnosticsHandle {
    /// Records a scheduler event.
    ///
    /// This method is non-blocking and will drop the event if the
    /// internal channel is full (backpressure protection).
    pub fn log(&self, kind: ToastEventKind) {
        let _ = self.event_tx.try_send(ToastEvent::new(kind));
    }
}

/// Central collector for scheduler events.
///
/// Events flow in through a channel and land in a memory-bounded circular
/// buffer; old events are automatically evicted when the buffer fills.
pub struct DiagnosticsCollector {
    /// Circular buffer storing events.
    buffer: CircularBuffer<ToastEvent>,
    /// Receiver for incoming events.
    event_rx: Receiver<ToastEvent>,
    /// Sender stored to create handles.
    event_tx: Sender<ToastEvent>,
    /// When collection started (monotonic clock for relative timestamps).
    collection_started_at: Instant,
    /// When collection started (wall clock for report metadata).
    collection_started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    /// Creates a new collector with the specified buffer capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    ///
    /// Handles are cheap to clone and can be distributed to different
    /// parts of the application.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Processes all pending events from the channel.
    ///
    /// Call this periodically (e.g., on each UI tick) to drain the
    /// event channel and store events in the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    /// Records an event directly to the buffer (bypassing the channel).
    ///
    /// Use this for synchronous logging when you have direct access to
    /// the collector (e.g., in the main update loop).
    pub fn log(&mut self, kind: ToastEventKind) {
        self.buffer.push(ToastEvent::new(kind));
    }

    /// Returns the number of events currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns true if no events are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns an iterator over all stored events (oldest first).
    pub fn iter(&self) -> impl Iterator<Item = &ToastEvent> {
        self.buffer.iter()
    }

    /// Clears all stored events.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns the buffer capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns how long the collector has been running.
    #[must_use]
    pub fn collection_duration(&self) -> std::time::Duration {
        self.collection_started_at.elapsed()
    }

    /// Exports all collected events as a JSON report.
    ///
    /// The report includes metadata (timestamps, event count) and all
    /// events with timestamps relative to collection start.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let report = self.build_report();
        serde_json::to_string_pretty(&report)
    }

    /// Builds a report from the current buffer contents.
    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> Report {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent {
                timestamp_ms: event
                    .timestamp
                    .saturating_duration_since(self.collection_started_at)
                    .as_millis() as u64,
                kind: event.kind.clone(),
            })
            .collect();

        Report {
            metadata: ReportMetadata {
                collection_started_at: self.collection_started_at_utc,
                collection_duration_ms: self.collection_started_at.elapsed().as_millis() as u64,
                event_count: events.len(),
            },
            events,
        }
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

/// An event with a timestamp relative to collection start, ready for export.
#[derive(Debug, Clone, Serialize)]
struct SerializableEvent {
    timestamp_ms: u64,
    #[serde(flatten)]
    kind: ToastEventKind,
}

#[derive(Debug, Clone, Serialize)]
struct ReportMetadata {
    collection_started_at: DateTime<Utc>,
    collection_duration_ms: u64,
    event_count: usize,
}

#[derive(Debug, Clone, Serialize)]
struct Report {
    metadata: ReportMetadata,
    events: Vec<SerializableEvent>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toasts::Priority;

    #[test]
    fn collector_new_creates_empty_buffer() {
        let collector = DiagnosticsCollector::new(BufferCapacity::default());

        assert!(collector.is_empty());
        assert_eq!(collector.len(), 0);
    }

    #[test]
    fn collector_log_stores_event() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());

        collector.log(ToastEventKind::Cleared);

        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn handle_log_sends_to_collector() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        handle.log(ToastEventKind::Shown {
            id: 1,
            priority: Priority::Normal,
        });

        // Event is in channel, not yet in buffer
        assert!(collector.is_empty());

        collector.process_pending();

        assert_eq!(collector.len(), 1);
        let event = collector.iter().next().unwrap();
        assert!(matches!(
            event.kind,
            ToastEventKind::Shown { id: 1, .. }
        ));
    }

    #[test]
    fn handle_is_clone() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle1 = collector.handle();
        let handle2 = handle1.clone();

        handle1.log(ToastEventKind::Cleared);
        handle2.log(ToastEventKind::Cleared);

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn collector_clear_removes_all_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());

        collector.log(ToastEventKind::Cleared);
        collector.log(ToastEventKind::QueueOverflow { evicted: 2 });

        assert_eq!(collector.len(), 2);

        collector.clear();

        assert!(collector.is_empty());
    }

    #[test]
    fn collector_iter_returns_events_in_order() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());

        collector.log(ToastEventKind::Queued { id: 1, depth: 1 });
        collector.log(ToastEventKind::Queued { id: 2, depth: 2 });

        let events: Vec<_> = collector.iter().collect();
        assert_eq!(events.len(), 2);
        assert!(events[0].timestamp <= events[1].timestamp);
    }

    #[test]
    fn export_json_contains_metadata_and_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::default());
        let handle = collector.handle();

        handle.log(ToastEventKind::Shown {
            id: 4,
            priority: Priority::High,
        });
        handle.log(ToastEventKind::DuplicateSuppressed {
            message: "Saved".to_string(),
        });
        collector.process_pending();
        collector.log(ToastEventKind::Cleared);

        let json = collector.export_json().expect("export should succeed");
        let parsed: serde_json::Value =
            serde_json::from_str(&json).expect("JSON should be parseable");

        let metadata = parsed.get("metadata").expect("should have metadata");
        assert!(metadata.get("collection_started_at").is_some());
        assert!(metadata.get("collection_duration_ms").is_some());
        assert_eq!(metadata.get("event_count").unwrap().as_u64().unwrap(), 3);

        let events = parsed
            .get("events")
            .expect("should have events")
            .as_array()
            .expect("events should be array");
        assert_eq!(events.len(), 3);

        for event in events {
            assert!(event.get("timestamp_ms").is_some());
            assert!(event.get("type").is_some());
        }

        assert_eq!(events[0].get("type").unwrap(), "shown");
        assert_eq!(events[1].get("type").unwrap(), "duplicate_suppressed");
        assert_eq!(events[2].get("type").unwrap(), "cleared");
    }

    #[test]
    fn export_json_with_empty_buffer() {
        let collector = DiagnosticsCollector::new(BufferCapacity::default());

        let json = collector.export_json().expect("export should succeed");
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        let events = parsed.get("events").unwrap().as_array().unwrap();
        assert!(events.is_empty());

        let event_count = parsed
            .get("metadata")
            .unwrap()
            .get("event_count")
            .unwrap()
            .as_u64()
            .unwrap();
        assert_eq!(event_count, 0);
    }

    #[test]
    fn collector_default_uses_default_capacity() {
        let collector = DiagnosticsCollector::default();

        assert_eq!(
            collector.capacity(),
            crate::config::DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY
        );
    }
}
