// SPDX-License-Identifier: MPL-2.0
//! Centralized module for the SVG glyphs used by the toast.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`, so repeated `view()` calls share one upload.
//! Glyphs are single-path monochrome SVGs; color comes from [`tinted`].
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `dismiss_toast`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Defines an icon function returning a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Handle {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../../assets/icons/", $filename));
            HANDLE.get_or_init(|| Handle::from_memory(DATA)).clone()
        }
    };
}

define_icon!(
    check_circle,
    "check_circle.svg",
    "Check circle icon: checkmark inside a filled disc."
);
define_icon!(
    warning,
    "warning.svg",
    "Warning icon: exclamation mark inside a triangle."
);
define_icon!(info, "info.svg", "Info icon: lowercase i inside a filled disc.");
define_icon!(cross, "close.svg", "Cross icon: two diagonal strokes (X).");

/// Wraps a handle in a square [`Svg`] widget tinted with `color`.
pub fn tinted<'a>(handle: Handle, size: f32, color: Color) -> Svg<'a, Theme> {
    Svg::new(handle)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .style(move |_theme: &Theme, _status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_handles_are_cached() {
        // Cached handles share an id, so the renderer uploads each glyph once
        assert_eq!(check_circle().id(), check_circle().id());
        assert_ne!(check_circle().id(), warning().id());
    }

    #[test]
    fn all_icons_load() {
        let _ = check_circle();
        let _ = warning();
        let _ = info();
        let _ = cross();
    }
}
