// SPDX-License-Identifier: MPL-2.0
//! Single-slot toast scheduling.
//!
//! This module implements a priority-preemptible display queue for
//! transient notifications: at most one toast is visible at a time, further
//! requests wait in a bounded FIFO queue, and a high-priority request
//! displaces whatever is showing, to be resumed later with its remaining
//! lifetime.
//!
//! # Components
//!
//! - [`toast`] - Core `Toast` request struct with priority and kind
//! - [`scheduler`] - `Scheduler` state machine: slot, queue, preemption
//! - [`timer`] - Cancellable dismissal timer handle
//! - [`dispatch`] - Late-binding `ToastDispatch` facade for remote callers
//! - [`widget`] - Toast overlay component for rendering the display slot
//!
//! # Usage
//!
//! ```
//! use iced_toasts::toasts::{Scheduler, Toast};
//!
//! let mut scheduler = Scheduler::new();
//!
//! // Submit a toast; it takes the display slot immediately when idle.
//! let id = scheduler.show(Toast::success("Session saved"));
//!
//! // An urgent toast preempts; the first one resumes afterwards.
//! scheduler.show(Toast::error("Connection lost").high_priority());
//!
//! // Drive timer expiry from a periodic tick.
//! scheduler.tick();
//! # let _ = id;
//! ```
//!
//! # Design Considerations
//!
//! - One display slot; pending toasts queue FIFO (capacity 5 by default)
//! - Queue overflow silently evicts the oldest pending toast
//! - Duplicate messages are suppressed while one is already tracked
//! - A preempted toast resumes with at least one second of lifetime

pub mod dispatch;
pub mod scheduler;
pub mod timer;
pub mod toast;
pub mod widget;

pub use dispatch::{command_channel, DispatchCommand, ToastDispatch};
pub use scheduler::{Interrupted, QueueCapacity, Scheduler, SchedulerOptions};
pub use timer::DismissTimer;
pub use toast::{Priority, Toast, ToastAction, ToastId, ToastKind};
