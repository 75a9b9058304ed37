// SPDX-License-Identifier: MPL-2.0
//! Late-binding dispatch facade.
//!
//! `ToastDispatch` lets any part of the hosting application request a toast
//! without holding a reference to the scheduler. The handle is cheap to
//! clone and starts out unbound; the hosting surface binds it to a command
//! channel when it mounts. Calls made while unbound are silently dropped
//! rather than queued, and rebinding simply replaces the forwarding
//! channel.
//!
//! Commands are delivered over a bounded channel with non-blocking
//! `try_send`, so a caller can never stall the UI thread; a full channel
//! drops the command the same way an unbound handle does.

use std::sync::{Arc, RwLock};

use crossbeam_channel::{bounded, Receiver, Sender};

use super::toast::{Toast, ToastId};

/// Capacity of the facade-to-scheduler command channel. Commands beyond
/// this are dropped rather than blocking the sender.
const COMMAND_CHANNEL_CAPACITY: usize = 64;

/// A request forwarded from the facade to the scheduler.
#[derive(Debug, Clone)]
pub enum DispatchCommand {
    Show(Toast),
    Hide(ToastId),
    ClearAll {
        /// Presentation-only hint: skip the dismiss transition. The
        /// scheduler ignores it.
        skip_animation: bool,
    },
}

/// Creates the bounded command channel the hosting surface binds to.
#[must_use]
pub fn command_channel() -> (Sender<DispatchCommand>, Receiver<DispatchCommand>) {
    bounded(COMMAND_CHANNEL_CAPACITY)
}

/// Process-wide handle for requesting toasts before and after the
/// scheduler's hosting surface has mounted.
#[derive(Clone, Debug, Default)]
pub struct ToastDispatch {
    binding: Arc<RwLock<Option<Sender<DispatchCommand>>>>,
}

impl ToastDispatch {
    /// Creates an unbound handle. All calls are no-ops until
    /// [`bind`](Self::bind) is invoked.
    #[must_use]
    pub fn unbound() -> Self {
        Self::default()
    }

    /// Binds the handle to a command channel, replacing any prior binding.
    /// Calls dropped while unbound are not retried.
    pub fn bind(&self, sender: Sender<DispatchCommand>) {
        if let Ok(mut binding) = self.binding.write() {
            *binding = Some(sender);
        }
    }

    /// Detaches the handle; subsequent calls are no-ops again.
    pub fn unbind(&self) {
        if let Ok(mut binding) = self.binding.write() {
            *binding = None;
        }
    }

    /// Returns whether a scheduler is currently receiving commands.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.read().map(|b| b.is_some()).unwrap_or(false)
    }

    /// Requests that `toast` be shown.
    ///
    /// Returns the id allocated at construction time. Because commands are
    /// drained asynchronously, the id may refer to a request that was later
    /// dropped (unbound handle, full channel, or duplicate suppression);
    /// hiding such an id is a harmless no-op.
    pub fn show(&self, toast: Toast) -> ToastId {
        let id = toast.id();
        self.send(DispatchCommand::Show(toast));
        id
    }

    /// Requests dismissal of the toast with the given id.
    pub fn hide(&self, id: ToastId) {
        self.send(DispatchCommand::Hide(id));
    }

    /// Requests that all tracked toasts be dropped.
    pub fn clear_all(&self, skip_animation: bool) {
        self.send(DispatchCommand::ClearAll { skip_animation });
    }

    fn send(&self, command: DispatchCommand) {
        if let Ok(binding) = self.binding.read() {
            if let Some(sender) = binding.as_ref() {
                // Non-blocking send - drop if the channel is full
                let _ = sender.try_send(command);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unbound_calls_are_dropped_silently() {
        let dispatch = ToastDispatch::unbound();
        assert!(!dispatch.is_bound());

        // Nothing to observe: the calls simply must not panic or block.
        let id = dispatch.show(Toast::new("dropped"));
        dispatch.hide(id);
        dispatch.clear_all(false);
    }

    #[test]
    fn bound_calls_forward_commands() {
        let dispatch = ToastDispatch::unbound();
        let (tx, rx) = command_channel();
        dispatch.bind(tx);
        assert!(dispatch.is_bound());

        let id = dispatch.show(Toast::new("hello"));
        dispatch.hide(id);
        dispatch.clear_all(true);

        match rx.try_recv().expect("show command") {
            DispatchCommand::Show(toast) => {
                assert_eq!(toast.id(), id);
                assert_eq!(toast.message(), "hello");
            }
            other => panic!("expected Show, got {other:?}"),
        }
        assert!(matches!(
            rx.try_recv().expect("hide command"),
            DispatchCommand::Hide(hidden) if hidden == id
        ));
        assert!(matches!(
            rx.try_recv().expect("clear command"),
            DispatchCommand::ClearAll {
                skip_animation: true
            }
        ));
    }

    #[test]
    fn handle_is_clone_and_shares_binding() {
        let dispatch = ToastDispatch::unbound();
        let clone = dispatch.clone();

        let (tx, rx) = command_channel();
        dispatch.bind(tx);

        // The clone sees the binding made through the original.
        assert!(clone.is_bound());
        clone.show(Toast::new("via clone"));
        assert!(rx.try_recv().is_ok());
    }

    #[test]
    fn rebinding_replaces_the_forwarding_channel() {
        let dispatch = ToastDispatch::unbound();
        let (old_tx, old_rx) = command_channel();
        let (new_tx, new_rx) = command_channel();

        dispatch.bind(old_tx);
        dispatch.bind(new_tx);
        dispatch.show(Toast::new("after remount"));

        assert!(old_rx.try_recv().is_err());
        assert!(new_rx.try_recv().is_ok());
    }

    #[test]
    fn unbind_restores_noop_behavior() {
        let dispatch = ToastDispatch::unbound();
        let (tx, rx) = command_channel();
        dispatch.bind(tx);
        dispatch.unbind();

        dispatch.show(Toast::new("late"));
        assert!(rx.try_recv().is_err());
        assert!(!dispatch.is_bound());
    }

    #[test]
    fn full_channel_drops_commands_instead_of_blocking() {
        let dispatch = ToastDispatch::unbound();
        let (tx, rx) = crossbeam_channel::bounded(1);
        dispatch.bind(tx);

        dispatch.show(Toast::new("kept"));
        dispatch.show(Toast::new("dropped"));

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }
}
