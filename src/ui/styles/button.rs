// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid button filled with `color`, white label, 8px corners.
///
/// Hover lightens and press darkens the fill so the three demo triggers
/// keep their own hue in every state.
pub fn filled(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color, drop_shadow) = match status {
            button::Status::Active => (color, WHITE, shadow::SM),
            button::Status::Hovered => (mix(color, WHITE, 0.15), WHITE, shadow::SM),
            button::Status::Pressed => (mix(color, palette::BLACK, 0.15), WHITE, shadow::NONE),
            button::Status::Disabled => (
                Color {
                    a: opacity::OVERLAY_MEDIUM,
                    ..color
                },
                Color {
                    a: opacity::OVERLAY_STRONG,
                    ..WHITE
                },
                shadow::NONE,
            ),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::MD.into(),
                ..Default::default()
            },
            shadow: drop_shadow,
            snap: true,
        }
    }
}

/// Linear blend of `base` toward `toward` by `amount` (0.0 keeps `base`).
fn mix(base: Color, toward: Color, amount: f32) -> Color {
    let t = amount.clamp(0.0, 1.0);
    Color {
        r: base.r + (toward.r - base.r) * t,
        g: base.g + (toward.g - base.g) * t,
        b: base.b + (toward.b - base.b) * t,
        a: base.a,
    }
}
