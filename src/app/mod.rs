// SPDX-License-Identifier: MPL-2.0
//! Demo shell hosting the toast scheduler.
//!
//! The `App` struct wires the scheduler, the dispatch facade, and the
//! diagnostics collector into an Iced application. It is intentionally
//! small: a handful of buttons that submit sample toasts through the
//! facade, plus the toast overlay rendering the display slot. The update
//! loop is the single mutator of scheduler state; every transition runs
//! synchronously within one message dispatch.

mod subscription;

use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

use crossbeam_channel::Receiver;
use iced::widget::{button, text, Column, Container, Stack};
use iced::{alignment, window, Element, Length, Subscription, Task, Theme};

use crate::config;
use crate::diagnostics::DiagnosticsCollector;
use crate::toasts::widget::{self, ToastOverlay};
use crate::toasts::{
    command_channel, DispatchCommand, Scheduler, SchedulerOptions, Toast, ToastAction,
    ToastDispatch,
};
use crate::ui::design_tokens::{spacing, typography};

pub const WINDOW_DEFAULT_WIDTH: u32 = 520;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 420;

/// Runtime flags received from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Alternate settings file, mainly for testing.
    pub config_path: Option<PathBuf>,
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded toast overlay interactions.
    Toast(widget::Message),
    /// Periodic tick for dismissal-timer expiry and command draining.
    Tick(Instant),
    /// Demo: submit a normal-priority success toast.
    ShowSaved,
    /// Demo: submit a normal-priority info toast.
    ShowSync,
    /// Demo: submit a high-priority error toast with a retry action.
    ShowDisconnect,
    /// Demo: drop every tracked toast.
    ClearAll,
}

/// Root Iced application state bridging the scheduler, the dispatch
/// facade, and the diagnostics collector.
pub struct App {
    scheduler: Scheduler,
    dispatch: ToastDispatch,
    commands: Receiver<DispatchCommand>,
    collector: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current", &self.scheduler.current().map(Toast::message))
            .field("queued", &self.scheduler.queued_count())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_options(SchedulerOptions::default())
    }
}

/// Builds the window settings.
fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from persisted configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_path {
            Some(path) => config::load_from_path(path).unwrap_or_default(),
            None => config::load().unwrap_or_default(),
        };

        let app = Self::with_options(SchedulerOptions::from_config(&config));
        (app, Task::none())
    }

    /// Builds the scheduler, binds the dispatch facade, and wires the
    /// diagnostics collector. Binding happens when the hosting surface
    /// mounts, so facade clones handed out earlier start forwarding from
    /// this point on.
    fn with_options(options: SchedulerOptions) -> Self {
        let collector = DiagnosticsCollector::default();
        let mut scheduler = Scheduler::with_options(options);
        scheduler.set_diagnostics(collector.handle());

        let (sender, commands) = command_channel();
        let dispatch = ToastDispatch::unbound();
        dispatch.bind(sender);

        Self {
            scheduler,
            dispatch,
            commands,
            collector,
        }
    }

    /// Returns a facade clone for other parts of the hosting application.
    #[must_use]
    pub fn dispatch(&self) -> ToastDispatch {
        self.dispatch.clone()
    }

    fn title(&self) -> String {
        String::from("Toast Scheduler")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.scheduler.has_toasts())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick(now) => {
                self.scheduler.tick_at(now);
                self.collector.process_pending();
            }
            Message::Toast(widget::Message::Dismiss(id)) => {
                self.scheduler.hide(id);
            }
            Message::Toast(widget::Message::Action(id)) => {
                if let Err(error) = self.scheduler.activate(id) {
                    eprintln!("toast action failed: {error}");
                }
            }
            Message::ShowSaved => {
                self.dispatch.show(Toast::success("Session saved"));
            }
            Message::ShowSync => {
                self.dispatch.show(Toast::info("Sync scheduled"));
            }
            Message::ShowDisconnect => {
                self.dispatch.show(
                    Toast::error("Connection lost")
                        .high_priority()
                        .with_action(ToastAction::new("Retry", || {
                            eprintln!("retry requested");
                        })),
                );
            }
            Message::ClearAll => {
                self.dispatch.clear_all(false);
            }
        }

        // Facade calls made during this dispatch (and any pending from
        // other callers) are applied before the next render.
        self.drain_commands(Instant::now());

        Task::none()
    }

    fn drain_commands(&mut self, now: Instant) {
        while let Ok(command) = self.commands.try_recv() {
            self.scheduler.apply_at(command, now);
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let controls = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .push(text("Toast scheduler demo").size(typography::TITLE_MD))
            .push(button(text("Show success toast")).on_press(Message::ShowSaved))
            .push(button(text("Show info toast")).on_press(Message::ShowSync))
            .push(button(text("Show urgent toast")).on_press(Message::ShowDisconnect))
            .push(button(text("Clear all")).on_press(Message::ClearAll));

        let content = Container::new(controls)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center);

        Stack::new()
            .push(content)
            .push(ToastOverlay::view_overlay(&self.scheduler).map(Message::Toast))
            .into()
    }
}
