// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants for the toast widget and the demo screen.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Motion**: Transition timings and spring parameters

## Examples

```
use iced_toast::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const TRANSPARENT: Color = Color::TRANSPARENT;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    /// Progress track behind the draining bar.
    pub const LIGHT_GRAY: Color = Color::from_rgb(0.8, 0.8, 0.8);

    /// Muted tint for the toast close glyph.
    pub const SECONDARY_CONTAINER: Color = Color::from_rgb(0.8, 0.78, 0.86);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.129, 0.588, 0.953);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;

    /// Drop shadow under the toast card.
    pub const SHADOW: f32 = 0.25;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 10.0;
    pub const MD: f32 = 16.0; // 2 units
    pub const XXL: f32 = 46.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Toast glyphs
    pub const TOAST_ICON: f32 = 30.0;
    pub const TOAST_CLOSE_ICON: f32 = 25.0;

    /// Height of the draining progress bar.
    pub const TOAST_PROGRESS_HEIGHT: f32 = 4.0;

    /// Widest the toast card grows before the message wraps.
    pub const TOAST_MAX_WIDTH: f32 = 420.0;

    pub const BUTTON_HEIGHT: f32 = 48.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - Button labels on the demo screen
    pub const TITLE_MD: f32 = 16.0;

    /// Large body - Toast message
    pub const BODY_LG: f32 = 16.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium border - Toast outline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Builds a drop shadow for an elevation level, in layout units.
    #[must_use]
    pub fn elevation(level: f32, alpha: f32) -> Shadow {
        Shadow {
            color: Color {
                a: opacity::SHADOW * alpha,
                ..palette::BLACK
            },
            offset: Vector {
                x: 0.0,
                y: level * 0.5,
            },
            blur_radius: level,
        }
    }
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Default auto-dismiss countdown.
    pub const TOAST_DURATION_MS: i64 = 3000;

    /// Duration of the slide-up offset transition.
    pub const SLIDE_DURATION_MS: i64 = 800;

    /// Frame interval while any transition is running (~60 fps).
    pub const FRAME_INTERVAL_MS: u64 = 16;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    assert!(sizing::TOAST_ICON > sizing::TOAST_CLOSE_ICON);
    assert!(sizing::TOAST_PROGRESS_HEIGHT > 0.0);

    assert!(border::WIDTH_MD > 0.0);
    assert!(radius::LG > radius::MD);

    assert!(motion::TOAST_DURATION_MS > 0);
};
