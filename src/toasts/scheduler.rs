// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle scheduling.
//!
//! The `Scheduler` owns the single display slot, the bounded pending queue,
//! and the interrupted slot used for priority preemption. Every transition
//! runs synchronously on the UI event loop; there is no locking, only one
//! mutator. Operations come in pairs: the plain method stamps
//! `Instant::now()`, the `*_at` variant takes an injected instant so tests
//! run on simulated time.

use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use super::dispatch::DispatchCommand;
use super::timer::DismissTimer;
use super::toast::{Toast, ToastId};
use crate::config::{
    DEFAULT_PREVENT_DUPLICATES, MAX_MAX_QUEUE_SIZE, MIN_MAX_QUEUE_SIZE, MIN_REMAINING_MS,
};
use crate::diagnostics::{DiagnosticsHandle, ToastEventKind};
use crate::error::{Error, Result};

/// Pending-queue capacity.
///
/// This newtype enforces validity at the type level, ensuring the value is
/// always within the supported range.
///
/// # Example
///
/// ```
/// use iced_toasts::toasts::QueueCapacity;
///
/// let capacity = QueueCapacity::new(5);
/// assert_eq!(capacity.value(), 5);
///
/// // Values outside range are clamped
/// let too_high = QueueCapacity::new(1000);
/// assert_eq!(too_high.value(), 32); // Clamped to max
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueCapacity(usize);

impl QueueCapacity {
    /// Creates a new queue capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_MAX_QUEUE_SIZE, MAX_MAX_QUEUE_SIZE))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_MAX_QUEUE_SIZE
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_MAX_QUEUE_SIZE
    }
}

impl Default for QueueCapacity {
    fn default() -> Self {
        Self(crate::config::DEFAULT_MAX_QUEUE_SIZE)
    }
}

/// Construction-time scheduler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerOptions {
    max_queue_size: QueueCapacity,
    prevent_duplicates: bool,
}

impl SchedulerOptions {
    /// Creates options from explicit values.
    #[must_use]
    pub fn new(max_queue_size: QueueCapacity, prevent_duplicates: bool) -> Self {
        Self {
            max_queue_size,
            prevent_duplicates,
        }
    }

    /// Derives options from a loaded [`Config`](crate::config::Config),
    /// falling back to defaults for absent fields.
    #[must_use]
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            max_queue_size: config
                .max_queue_size
                .map(QueueCapacity::new)
                .unwrap_or_default(),
            prevent_duplicates: config
                .prevent_duplicates
                .unwrap_or(DEFAULT_PREVENT_DUPLICATES),
        }
    }

    /// Returns the pending-queue capacity.
    #[must_use]
    pub fn max_queue_size(&self) -> QueueCapacity {
        self.max_queue_size
    }

    /// Returns whether duplicate messages are suppressed.
    #[must_use]
    pub fn prevent_duplicates(&self) -> bool {
        self.prevent_duplicates
    }
}

impl Default for SchedulerOptions {
    fn default() -> Self {
        Self {
            max_queue_size: QueueCapacity::default(),
            prevent_duplicates: DEFAULT_PREVENT_DUPLICATES,
        }
    }
}

/// A toast displaced from the display slot by a high-priority arrival,
/// together with how much visible lifetime it still had.
#[derive(Debug, Clone)]
pub struct Interrupted {
    toast: Toast,
    remaining: Duration,
}

impl Interrupted {
    /// Returns the displaced toast.
    #[must_use]
    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Returns the remaining visible lifetime at displacement, already
    /// clamped to the minimum floor.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }
}

/// Single-slot, priority-preemptible toast scheduler.
///
/// Invariants held after every operation:
/// - at most one toast occupies the display slot;
/// - the pending queue never exceeds its configured capacity;
/// - with duplicate prevention on, no two tracked toasts share a message;
/// - the interrupted slot only ever holds a toast that was not high
///   priority when displaced;
/// - a dismissal timer is armed iff the slot is occupied.
#[derive(Debug, Default)]
pub struct Scheduler {
    options: SchedulerOptions,
    current: Option<Toast>,
    current_started_at: Option<Instant>,
    queue: VecDeque<Toast>,
    interrupted: Option<Interrupted>,
    timer: Option<DismissTimer>,
    timer_seq: u64,
    /// Optional diagnostics handle for recording scheduling events.
    diagnostics: Option<DiagnosticsHandle>,
}

impl Scheduler {
    /// Creates a scheduler with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler with the given options.
    #[must_use]
    pub fn with_options(options: SchedulerOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Sets the diagnostics handle for recording scheduling events.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Submits a toast for display.
    ///
    /// Returns the toast's id, or `None` when the request was dropped by
    /// duplicate suppression.
    pub fn show(&mut self, toast: Toast) -> Option<ToastId> {
        self.show_at(toast, Instant::now())
    }

    /// [`show`](Self::show) with an injected current instant.
    pub fn show_at(&mut self, toast: Toast, now: Instant) -> Option<ToastId> {
        if self.options.prevent_duplicates && self.is_duplicate(toast.message()) {
            self.log(ToastEventKind::DuplicateSuppressed {
                message: toast.message().to_string(),
            });
            return None;
        }

        let id = toast.id();
        if self.current.is_none() {
            self.log(ToastEventKind::Shown {
                id: id.value(),
                priority: toast.priority(),
            });
            self.display(toast, now);
        } else if toast.priority().is_high() {
            self.preempt(toast, now);
        } else {
            self.enqueue(toast);
        }
        Some(id)
    }

    /// Dismisses the toast with the given id.
    ///
    /// A queued toast is removed in place; the displayed toast is replaced
    /// by whatever comes next. Unknown ids are ignored, so the operation is
    /// idempotent.
    pub fn hide(&mut self, id: ToastId) {
        self.hide_at(id, Instant::now());
    }

    /// [`hide`](Self::hide) with an injected current instant.
    pub fn hide_at(&mut self, id: ToastId, now: Instant) {
        if let Some(pos) = self.queue.iter().position(|t| t.id() == id) {
            self.queue.remove(pos);
            return;
        }
        if self.current.as_ref().is_some_and(|t| t.id() == id) {
            self.current = None;
            self.cancel_timer();
            self.resolve_next(now);
        }
    }

    /// Advances the machine: if the armed dismissal timer has expired at
    /// `now`, the displayed toast ends and the next one takes the slot.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    /// [`tick`](Self::tick) with an injected current instant.
    pub fn tick_at(&mut self, now: Instant) {
        if self.timer.is_some_and(|t| t.is_elapsed(now)) {
            self.current = None;
            self.cancel_timer();
            self.resolve_next(now);
        }
    }

    /// Invokes the displayed toast's action callback, then dismisses it.
    ///
    /// Returns `Ok(true)` when an action ran. Ids that do not match the
    /// displayed toast, and toasts without an action, are ignored with
    /// `Ok(false)`. A panicking callback is caught and reported as
    /// [`Error::ActionCallback`]; the toast is dismissed regardless, so a
    /// faulty callback cannot pin the slot.
    pub fn activate(&mut self, id: ToastId) -> Result<bool> {
        self.activate_at(id, Instant::now())
    }

    /// [`activate`](Self::activate) with an injected current instant.
    pub fn activate_at(&mut self, id: ToastId, now: Instant) -> Result<bool> {
        let action = match self.current.as_ref() {
            Some(current) if current.id() == id => current.action().cloned(),
            _ => return Ok(false),
        };
        let Some(action) = action else {
            return Ok(false);
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| action.invoke()));
        self.hide_at(id, now);

        match outcome {
            Ok(()) => Ok(true),
            Err(payload) => {
                let detail = panic_detail(payload.as_ref());
                self.log(ToastEventKind::ActionFailed {
                    id: id.value(),
                    detail: detail.clone(),
                });
                Err(Error::ActionCallback(detail))
            }
        }
    }

    /// Drops everything: the displayed toast, the queue, the interrupted
    /// slot, and the armed timer.
    pub fn clear_all(&mut self) {
        self.cancel_timer();
        self.current = None;
        self.current_started_at = None;
        self.queue.clear();
        self.interrupted = None;
        self.log(ToastEventKind::Cleared);
    }

    /// Applies a command received through the dispatch facade.
    ///
    /// The `skip_animation` flag on `ClearAll` only concerns the
    /// presentation layer and is ignored here.
    pub fn apply_at(&mut self, command: DispatchCommand, now: Instant) {
        match command {
            DispatchCommand::Show(toast) => {
                self.show_at(toast, now);
            }
            DispatchCommand::Hide(id) => self.hide_at(id, now),
            DispatchCommand::ClearAll { .. } => self.clear_all(),
        }
    }

    /// Returns the displayed toast, if any.
    #[must_use]
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Returns when the displayed toast most recently became visible.
    #[must_use]
    pub fn current_started_at(&self) -> Option<Instant> {
        self.current_started_at
    }

    /// Returns the pending toasts in display order.
    pub fn queued(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    /// Returns the number of pending toasts.
    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    /// Returns the preempted toast awaiting resumption, if any.
    #[must_use]
    pub fn interrupted(&self) -> Option<&Interrupted> {
        self.interrupted.as_ref()
    }

    /// Returns the armed dismissal timer, if any.
    #[must_use]
    pub fn timer(&self) -> Option<&DismissTimer> {
        self.timer.as_ref()
    }

    /// Returns whether any toast is tracked (displayed, queued, or
    /// interrupted). Drives the tick subscription.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        self.current.is_some() || !self.queue.is_empty() || self.interrupted.is_some()
    }

    /// Returns whether the machine is idle.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        !self.has_toasts()
    }

    /// Returns the construction-time options.
    #[must_use]
    pub fn options(&self) -> &SchedulerOptions {
        &self.options
    }

    fn is_duplicate(&self, message: &str) -> bool {
        self.current.as_ref().is_some_and(|t| t.message() == message)
            || self.queue.iter().any(|t| t.message() == message)
            || self
                .interrupted
                .as_ref()
                .is_some_and(|i| i.toast.message() == message)
    }

    /// Places `toast` in the slot, stamps its start instant, and arms a
    /// fresh dismissal timer for its full requested duration.
    fn display(&mut self, toast: Toast, now: Instant) {
        let duration = toast.duration();
        self.current = Some(toast);
        self.current_started_at = Some(now);
        self.arm_timer(duration, now);
    }

    fn preempt(&mut self, incoming: Toast, now: Instant) {
        let Some(outgoing) = self.current.take() else {
            // Slot freed between the check and the take; display directly.
            self.log(ToastEventKind::Shown {
                id: incoming.id().value(),
                priority: incoming.priority(),
            });
            self.display(incoming, now);
            return;
        };

        let started = self.current_started_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(started);
        let remaining = outgoing
            .duration()
            .saturating_sub(elapsed)
            .max(Duration::from_millis(MIN_REMAINING_MS));
        self.cancel_timer();

        if outgoing.priority().is_high() {
            // A displaced high-priority toast goes to the queue front,
            // carrying its remaining lifetime as its new duration. The
            // interrupted slot stays reserved for normal-priority toasts.
            if self.queue.len() >= self.options.max_queue_size.value() {
                if let Some(evicted) = self.queue.pop_back() {
                    self.log(ToastEventKind::QueueOverflow {
                        evicted: evicted.id().value(),
                    });
                }
            }
            self.log(ToastEventKind::Preempted {
                id: outgoing.id().value(),
                remaining_ms: millis(remaining),
            });
            self.queue.push_front(outgoing.with_duration(remaining));
        } else {
            self.log(ToastEventKind::Preempted {
                id: outgoing.id().value(),
                remaining_ms: millis(remaining),
            });
            if let Some(previous) = self.interrupted.replace(Interrupted {
                toast: outgoing,
                remaining,
            }) {
                self.log(ToastEventKind::InterruptedReplaced {
                    dropped: previous.toast.id().value(),
                });
            }
        }

        self.log(ToastEventKind::Shown {
            id: incoming.id().value(),
            priority: incoming.priority(),
        });
        self.display(incoming, now);
    }

    fn enqueue(&mut self, toast: Toast) {
        if self.queue.len() >= self.options.max_queue_size.value() {
            if let Some(evicted) = self.queue.pop_front() {
                self.log(ToastEventKind::QueueOverflow {
                    evicted: evicted.id().value(),
                });
            }
        }
        self.log(ToastEventKind::Queued {
            id: toast.id().value(),
            depth: self.queue.len() + 1,
        });
        self.queue.push_back(toast);
    }

    /// Fills the display slot after the previous occupant ended: the
    /// interrupted toast resumes with its remaining duration, else the
    /// queue head is promoted, else the machine goes idle.
    fn resolve_next(&mut self, now: Instant) {
        if let Some(Interrupted { toast, remaining }) = self.interrupted.take() {
            self.log(ToastEventKind::Resumed {
                id: toast.id().value(),
                remaining_ms: millis(remaining),
            });
            self.display(toast.with_duration(remaining), now);
        } else if let Some(next) = self.queue.pop_front() {
            self.log(ToastEventKind::Shown {
                id: next.id().value(),
                priority: next.priority(),
            });
            self.display(next, now);
        } else {
            self.current = None;
            self.current_started_at = None;
        }
    }

    fn arm_timer(&mut self, duration: Duration, now: Instant) {
        // Cancel-before-arm: a fresh generation supersedes any prior handle.
        self.cancel_timer();
        self.timer_seq += 1;
        self.timer = Some(DismissTimer::arm(self.timer_seq, duration, now));
    }

    fn cancel_timer(&mut self) {
        self.timer = None;
    }

    fn log(&self, kind: ToastEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }
}

#[allow(clippy::cast_possible_truncation)] // Durations in ms fit comfortably in u64
fn millis(duration: Duration) -> u64 {
    duration.as_millis() as u64
}

fn panic_detail(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "action callback panicked".to_string()
    }
}
