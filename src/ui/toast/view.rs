// SPDX-License-Identifier: MPL-2.0
//! Rendering for the toast card.

use super::{Message, Props, State, ToastColors, ToastStyle};
use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::icons;
use iced::alignment::Vertical;
use iced::font::Weight;
use iced::widget::{button, container, progress_bar, text, Column, Container, Row, Space};
use iced::{Background, Border, Color, Element, Font, Length, Padding, Theme};
use std::time::Instant;

/// Renders the toast overlay for the frame at `now`.
///
/// Returns an empty element while unmounted so the host can always stack it.
///
/// The scale transition narrows the card's maximum width rather than
/// transforming it, so the message re-wraps while the card grows or
/// shrinks instead of scaling uniformly. The exit fade is applied to color
/// alpha. The close button only accepts presses while
/// [`State::is_closable`] holds.
pub fn view<'a>(state: &State, props: Props<'a>, now: Instant) -> Element<'a, Message> {
    if !state.is_mounted() {
        return Space::new().width(Length::Shrink).into();
    }

    let style = props.style;
    let alpha = state.alpha_at(now);
    let colors = props.colors.faded(alpha);
    let scale = state.scale_at(now).max(0.0);
    let progress = state.progress_at(now);

    let icon = icons::tinted(props.icon.handle(), style.icon_size, colors.progress);

    let font = Font {
        weight: if style.bold { Weight::Bold } else { Weight::Normal },
        ..Font::DEFAULT
    };
    let message = text(props.message)
        .size(style.text_size)
        .font(font)
        .color(colors.text);

    let close_button = button(icons::tinted(
        icons::cross(),
        style.close_icon_size,
        colors.close,
    ))
    .on_press_maybe(state.is_closable().then_some(Message::Close))
    .padding(Padding::ZERO)
    .style(close_button_style);

    // Layout: [icon] [message .......] [close]
    let leading = Row::new()
        .spacing(style.spacer_width)
        .align_y(Vertical::Center)
        .push(icon)
        .push(message)
        .width(Length::Fill);

    let content = Container::new(
        Row::new()
            .align_y(Vertical::Center)
            .push(leading)
            .push(close_button),
    )
    .width(Length::Fill)
    .padding(style.content_padding);

    let bar = progress_bar(0.0..=1.0, progress)
        .girth(style.progress_height)
        .style(move |_theme: &Theme| progress_style(colors));

    let card = Container::new(Column::new().push(content).push(bar))
        .width(Length::Fill)
        .max_width(style.max_width * scale)
        .clip(true)
        .style(move |_theme: &Theme| card_style(&style, colors, alpha));

    let (horizontal, vertical) = style.outer_padding;
    let offset = state.slide_offset_at(now);

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(props.alignment.horizontal())
        .align_y(props.alignment.vertical())
        .padding(Padding {
            top: vertical + offset.max(0.0),
            right: horizontal,
            bottom: (vertical - offset).max(0.0),
            left: horizontal,
        })
        .into()
}

/// Style function for the toast card.
fn card_style(style: &ToastStyle, colors: ToastColors, alpha: f32) -> container::Style {
    let mut drop_shadow = shadow::elevation(style.shadow_elevation, alpha);
    // Shadow follows the wider shadow corner, the card clips to the container radius
    drop_shadow.blur_radius = drop_shadow.blur_radius.max(style.shadow_corner * 0.5);

    container::Style {
        background: Some(Background::Color(colors.background)),
        border: Border {
            color: colors.border,
            width: style.border_width,
            radius: style.container_radius.into(),
        },
        shadow: drop_shadow,
        text_color: Some(colors.text),
        ..Default::default()
    }
}

fn progress_style(colors: ToastColors) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(colors.track),
        bar: Background::Color(colors.progress),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
    }
}

/// Style function for the close button: invisible until hovered.
fn close_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette::BLACK,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}
