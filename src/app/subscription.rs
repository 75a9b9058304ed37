// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo shell.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription driving dismissal-timer expiry
/// and dispatch-command draining.
///
/// The subscription only runs while the scheduler tracks at least one
/// toast; an idle scheduler needs no wakeups.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
