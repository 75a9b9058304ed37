// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a single-slot, priority-preemptible toast notification
//! scheduler for applications built with the Iced GUI framework.
//!
//! At most one toast is visible at a time; further requests wait in a
//! bounded queue, high-priority requests preempt and later restore what
//! they displaced, and duplicate messages are suppressed while one is
//! already tracked. A late-binding dispatch facade lets any part of the
//! hosting application request a toast without a scheduler reference.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod toasts;
pub mod ui;
