// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the scheduler's display slot.
//!
//! The widget is a pure consumer of the scheduler's observable state: it
//! renders whatever currently occupies the slot as a small card with a
//! kind-colored accent, an optional action button, and a dismiss button,
//! and reports presses back as [`Message`] values for the host to route
//! into `hide`/`activate`.

use super::scheduler::Scheduler;
use super::toast::{Toast, ToastId};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    /// The dismiss button of the given toast was pressed.
    Dismiss(ToastId),
    /// The action button of the given toast was pressed.
    Action(ToastId),
}

/// Toast widget configuration.
pub struct ToastOverlay;

impl ToastOverlay {
    /// Renders a single toast card.
    pub fn view(toast: &Toast) -> Element<'_, Message> {
        let accent_color = toast.kind().color();
        let toast_id = toast.id();

        // Message text
        let message_widget =
            Text::new(toast.message())
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                });

        // Layout: [message] [action?] [dismiss]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(action) = toast.action() {
            let action_button = button(text(action.label()).size(typography::BODY_SM))
                .on_press(Message::Action(toast_id))
                .padding(spacing::XXS)
                .style(action_button_style);
            content = content.push(action_button);
        }

        // Dismiss button (always visible, uses main text color for good contrast)
        let dismiss_button = button(text("✕").size(typography::BODY_SM))
            .on_press(Message::Dismiss(toast_id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        content = content.push(dismiss_button);

        // Toast card with accent border
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay: the single display slot, bottom-right.
    pub fn view_overlay(scheduler: &Scheduler) -> Element<'_, Message> {
        match scheduler.current() {
            None => {
                // Return an empty container that takes no space
                Container::new(text(""))
                    .width(Length::Shrink)
                    .height(Length::Shrink)
                    .into()
            }
            Some(toast) => Container::new(Self::view(toast))
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into(),
        }
    }
}

/// Style function for the toast card container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the action button.
fn action_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        button::Status::Active => palette::PRIMARY_500,
        button::Status::Disabled => Color {
            a: opacity::OVERLAY_MEDIUM,
            ..base.text
        },
    };

    button::Style {
        background: None,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
