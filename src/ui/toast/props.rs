// SPDX-License-Identifier: MPL-2.0
//! Inputs the host passes to the toast on every render.

use crate::ui::design_tokens::{border, motion, palette, radius, sizing, spacing, typography};
use crate::ui::icons;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::svg;
use iced::Color;
use serde::{Deserialize, Serialize};

/// The six colors a toast is painted with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastColors {
    pub border: Color,
    pub background: Color,
    pub text: Color,
    /// Progress bar fill, also used to tint the leading icon.
    pub progress: Color,
    pub track: Color,
    pub close: Color,
}

impl Default for ToastColors {
    fn default() -> Self {
        Self {
            border: palette::TRANSPARENT,
            background: palette::WHITE,
            text: palette::BLACK,
            progress: palette::ERROR_500,
            track: palette::LIGHT_GRAY,
            close: palette::SECONDARY_CONTAINER,
        }
    }
}

impl ToastColors {
    /// Returns a copy with every color's alpha multiplied by `alpha`.
    #[must_use]
    pub fn faded(self, alpha: f32) -> Self {
        let fade = |color: Color| Color {
            a: color.a * alpha.clamp(0.0, 1.0),
            ..color
        };
        Self {
            border: fade(self.border),
            background: fade(self.background),
            text: fade(self.text),
            progress: fade(self.progress),
            track: fade(self.track),
            close: fade(self.close),
        }
    }
}

/// Leading glyph shown before the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastIcon {
    CheckCircle,
    #[default]
    Warning,
    Info,
}

impl ToastIcon {
    #[must_use]
    pub fn handle(self) -> svg::Handle {
        match self {
            ToastIcon::CheckCircle => icons::check_circle(),
            ToastIcon::Warning => icons::warning(),
            ToastIcon::Info => icons::info(),
        }
    }
}

/// Where the card is anchored inside the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastAlignment {
    TopStart,
    TopCenter,
    TopEnd,
    CenterStart,
    Center,
    CenterEnd,
    BottomStart,
    #[default]
    BottomCenter,
    BottomEnd,
}

impl ToastAlignment {
    #[must_use]
    pub fn horizontal(self) -> Horizontal {
        match self {
            Self::TopStart | Self::CenterStart | Self::BottomStart => Horizontal::Left,
            Self::TopCenter | Self::Center | Self::BottomCenter => Horizontal::Center,
            Self::TopEnd | Self::CenterEnd | Self::BottomEnd => Horizontal::Right,
        }
    }

    #[must_use]
    pub fn vertical(self) -> Vertical {
        match self {
            Self::TopStart | Self::TopCenter | Self::TopEnd => Vertical::Top,
            Self::CenterStart | Self::Center | Self::CenterEnd => Vertical::Center,
            Self::BottomStart | Self::BottomCenter | Self::BottomEnd => Vertical::Bottom,
        }
    }
}

/// Cosmetic sizing overrides. Defaults match the stock toast look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastStyle {
    pub icon_size: f32,
    pub close_icon_size: f32,
    /// Corner radius the drop shadow is cast with.
    pub shadow_corner: f32,
    pub shadow_elevation: f32,
    /// Corner radius of the card background and border.
    pub container_radius: f32,
    pub border_width: f32,
    pub bold: bool,
    pub text_size: f32,
    pub progress_height: f32,
    /// Gap between the icon and the message.
    pub spacer_width: f32,
    /// Padding around the icon/message/close row.
    pub content_padding: f32,
    /// Padding between the overlay edge and the card, as (horizontal, vertical).
    pub outer_padding: (f32, f32),
    pub max_width: f32,
    /// Starting vertical offset of the slide-up transition. Zero disables it.
    pub slide_from: f32,
}

impl Default for ToastStyle {
    fn default() -> Self {
        Self {
            icon_size: sizing::TOAST_ICON,
            close_icon_size: sizing::TOAST_CLOSE_ICON,
            shadow_corner: radius::LG,
            shadow_elevation: 6.0,
            container_radius: radius::MD,
            border_width: border::WIDTH_MD,
            bold: true,
            text_size: typography::BODY_LG,
            progress_height: sizing::TOAST_PROGRESS_HEIGHT,
            spacer_width: spacing::XS,
            content_padding: spacing::MD,
            outer_padding: (spacing::MD, spacing::SM),
            max_width: sizing::TOAST_MAX_WIDTH,
            slide_from: 0.0,
        }
    }
}

/// Everything the toast needs to render one frame.
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    pub message: &'a str,
    pub visible: bool,
    /// Bumped by the host on every show; a new value restarts the countdown.
    pub generation: u64,
    pub duration_ms: i64,
    pub colors: ToastColors,
    pub icon: ToastIcon,
    pub alignment: ToastAlignment,
    pub style: ToastStyle,
}

impl<'a> Props<'a> {
    /// Props for a hidden toast with default look.
    pub fn new(message: &'a str) -> Self {
        Self {
            message,
            visible: false,
            generation: 0,
            duration_ms: motion::TOAST_DURATION_MS,
            colors: ToastColors::default(),
            icon: ToastIcon::default(),
            alignment: ToastAlignment::default(),
            style: ToastStyle::default(),
        }
    }

    #[must_use]
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    #[must_use]
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    #[must_use]
    pub fn colors(mut self, colors: ToastColors) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: ToastIcon) -> Self {
        self.icon = icon;
        self
    }

    #[must_use]
    pub fn alignment(mut self, alignment: ToastAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn style(mut self, style: ToastStyle) -> Self {
        self.style = style;
        self
    }
}
