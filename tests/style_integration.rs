// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use iced::Theme;
    use iced_toast::ui::design_tokens::{opacity, palette, sizing, spacing};
    use iced_toast::ui::host::ToastTrigger;
    use iced_toast::ui::styles::button;
    use iced_toast::ui::theming::ThemeMode;
    use iced_toast::ui::toast::ToastColors;

    #[test]
    fn trigger_button_styles_are_callable() {
        let theme = Theme::Dark;

        for trigger in ToastTrigger::ALL {
            let style = button::filled(trigger.progress_color());
            let active = style(&theme, iced::widget::button::Status::Active);
            let disabled = style(&theme, iced::widget::button::Status::Disabled);
            assert_ne!(active.background, disabled.background);
        }
    }

    #[test]
    fn design_tokens_are_accessible() {
        // Palette
        let _ = palette::SUCCESS_500;
        let _ = palette::WHITE;

        // Spacing
        let _ = spacing::MD;

        // Opacity
        let _ = opacity::OVERLAY_STRONG;

        // Sizing
        assert!(sizing::TOAST_ICON > sizing::TOAST_CLOSE_ICON);
    }

    #[test]
    fn theming_switches_correctly() {
        let light = ThemeMode::Light.colors();
        let dark = ThemeMode::Dark.colors();

        // Surface colors should be visually opposite between light and dark
        assert!(light.surface_primary.r > dark.surface_primary.r);

        // Text colors should also be opposite between light and dark
        assert!(light.text_primary.r < dark.text_primary.r);
    }

    #[test]
    fn default_toast_colors_read_on_white() {
        let colors = ToastColors::default();
        assert_eq!(colors.background, palette::WHITE);
        assert_eq!(colors.text, palette::BLACK);
        assert_eq!(colors.border.a, 0.0);
    }
}
