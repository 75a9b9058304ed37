// SPDX-License-Identifier: MPL-2.0
//! Core toast request data structures.
//!
//! This module defines the `Toast` request struct and its companion types:
//! [`ToastId`], [`Priority`], [`ToastKind`], and [`ToastAction`].

use crate::config::DEFAULT_TOAST_DURATION_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Unique identifier for a toast request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

impl ToastId {
    /// Creates a new unique toast ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value, used when recording diagnostics events.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

/// Scheduling priority. A high-priority toast preempts whatever currently
/// occupies the display slot; a normal one waits its turn in the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    #[default]
    Normal,
    High,
}

impl Priority {
    /// Returns whether this is the preempting priority level.
    #[must_use]
    pub fn is_high(self) -> bool {
        matches!(self, Priority::High)
    }
}

/// Cosmetic classification determining the accent color. Never consulted by
/// scheduling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            ToastKind::Info => palette::INFO_500,
            ToastKind::Success => palette::SUCCESS_500,
            ToastKind::Warning => palette::WARNING_500,
            ToastKind::Error => palette::ERROR_500,
        }
    }
}

/// A labeled callback invoked when the user activates the toast, after which
/// the toast is dismissed.
#[derive(Clone)]
pub struct ToastAction {
    label: String,
    callback: Arc<dyn Fn() + Send + Sync>,
}

impl ToastAction {
    /// Creates an action with the given button label and callback.
    pub fn new(label: impl Into<String>, callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            callback: Arc::new(callback),
        }
    }

    /// Returns the button label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn invoke(&self) {
        (self.callback)();
    }
}

impl fmt::Debug for ToastAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A transient notification request handed to the scheduler.
///
/// The id is allocated at construction time so that callers going through
/// the dispatch facade receive it synchronously. The message text doubles as
/// the identity key for duplicate suppression.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this request.
    id: ToastId,
    /// Display text; also the duplicate-suppression key.
    message: String,
    /// Requested visible lifetime.
    duration: Duration,
    /// Cosmetic classification (accent color).
    kind: ToastKind,
    /// Scheduling priority.
    priority: Priority,
    /// Optional user action.
    action: Option<ToastAction>,
}

impl Toast {
    /// Creates a new toast with the given message, default duration, normal
    /// priority, and [`ToastKind::Info`].
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            id: ToastId::new(),
            message: message.into(),
            duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
            kind: ToastKind::Info,
            priority: Priority::Normal,
            action: None,
        }
    }

    /// Creates an info toast.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    /// Creates a success toast.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(ToastKind::Success)
    }

    /// Creates a warning toast.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(ToastKind::Warning)
    }

    /// Creates an error toast.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message).with_kind(ToastKind::Error)
    }

    /// Sets the cosmetic kind.
    #[must_use]
    pub fn with_kind(mut self, kind: ToastKind) -> Self {
        self.kind = kind;
        self
    }

    /// Overrides the visible lifetime.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Sets the scheduling priority.
    #[must_use]
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Marks the toast as preempting.
    #[must_use]
    pub fn high_priority(self) -> Self {
        self.with_priority(Priority::High)
    }

    /// Attaches a user action.
    #[must_use]
    pub fn with_action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Returns the toast's unique ID.
    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    /// Returns the display text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the requested visible lifetime.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns the cosmetic kind.
    #[must_use]
    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Returns the scheduling priority.
    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the attached action, if any.
    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }
}
