// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for recording scheduler activity.
//!
//! The scheduler's quiet failure modes (suppressed duplicates, queue
//! overflow eviction, replaced interrupted toasts, panicking action
//! callbacks) never surface as errors to callers. This module makes them
//! observable instead: the scheduler records every decision through a
//! [`DiagnosticsHandle`], and the collector stores them in a memory-bounded
//! circular buffer that can be exported as JSON.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`ToastEvent`] / [`ToastEventKind`]: The recorded scheduler decisions
//! - [`DiagnosticsCollector`] / [`DiagnosticsHandle`]: Channel-fed store

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{ToastEvent, ToastEventKind};
