// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the host screen, localization
//! and configuration.
//!
//! The `App` struct owns the [`host::State`] and translates runtime events
//! (frame ticks, button presses, delayed shows) into host messages. Every
//! handler samples the clock once so the toast sees a single consistent
//! instant per message.

pub mod config;
mod message;
pub mod paths;
mod subscription;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::ui::host::{self, HostSettings};
use crate::ui::theming::ThemeMode;
use crate::ui::toast;
use iced::widget::container;
use iced::{window, Background, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    /// Never `System`: resolved once in `new`.
    theme_mode: ThemeMode,
    host: host::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("theme_mode", &self.theme_mode)
            .field("toast_visible", &self.host.toast_state().visible)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 640;
pub const WINDOW_DEFAULT_WIDTH: u32 = 420;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an Fn boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let i18n = I18n::default();
        let host = host::State::new(i18n.tr("toast-idle"), HostSettings::default());
        Self {
            i18n,
            theme_mode: ThemeMode::System.resolve(),
            host,
        }
    }
}

impl App {
    /// Initializes application state from config and CLI flags.
    ///
    /// A config file that fails to load is reported through the toast itself.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let settings = HostSettings {
            duration_ms: flags.duration_ms.unwrap_or(config.toast.duration_ms()),
            reset_delay: config.toast.reset_delay(),
            alignment: config.toast.alignment(),
            ..HostSettings::default()
        };
        let mut host = host::State::new(i18n.tr("toast-idle"), settings);

        if let Some(key) = config_warning {
            host.apply(host::ToastTrigger::Error, i18n.tr(&key), Instant::now());
        }

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode.resolve(),
            host,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.host.is_animating())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let (message, now) = match message {
            Message::Tick(now) => (host::Message::Toast(toast::Message::Tick(now)), now),
            Message::Host(message) => (message, Instant::now()),
        };
        self.host.update(message, &self.i18n, now).map(Message::Host)
    }

    fn view(&self) -> Element<'_, Message> {
        let colors = self.theme_mode.colors();
        let content = self.host.view(&self.i18n, Instant::now()).map(Message::Host);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(colors.surface_primary)),
                text_color: Some(colors.text_primary),
                ..container::Style::default()
            })
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = paths::env_lock();
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(paths::ENV_CONFIG_DIR).ok();
        std::env::set_var(paths::ENV_CONFIG_DIR, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(paths::ENV_CONFIG_DIR, value);
        } else {
            std::env::remove_var(paths::ENV_CONFIG_DIR);
        }
    }

    fn english() -> Flags {
        Flags {
            lang: Some("en-US".to_string()),
            ..Flags::default()
        }
    }

    #[test]
    fn new_starts_with_hidden_idle_toast() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(english());
            let state = app.host.toast_state();
            assert!(!state.visible);
            assert_eq!(state.message, "Success!");
            assert_eq!(state.duration_ms, 3000);
            assert!(!app.host.is_animating());
        });
    }

    #[test]
    fn system_theme_is_resolved_at_startup() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join("settings.toml"), "[general]\ntheme_mode = \"system\"\n")
                .expect("write config");

            let (app, _task) = App::new(english());
            assert_ne!(app.theme_mode, ThemeMode::System);
            assert_ne!(App::default().theme_mode, ThemeMode::System);
        });
    }

    #[test]
    fn explicit_theme_is_kept() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join("settings.toml"), "[general]\ntheme_mode = \"light\"\n")
                .expect("write config");

            let (app, _task) = App::new(english());
            assert_eq!(app.theme_mode, ThemeMode::Light);
            assert_eq!(app.theme(), Theme::Light);
        });
    }

    #[test]
    fn title_is_localized() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(english());
            assert!(!app.title().starts_with("MISSING"));
        });
    }

    #[test]
    fn config_values_reach_the_host() {
        with_temp_config_dir(|dir| {
            std::fs::write(
                dir.join("settings.toml"),
                "[toast]\nduration_ms = 1500\nreset_delay_ms = 50\n",
            )
            .expect("write config");

            let (app, _task) = App::new(english());
            assert_eq!(app.host.toast_state().duration_ms, 1500);
        });
    }

    #[test]
    fn duration_flag_overrides_config() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join("settings.toml"), "[toast]\nduration_ms = 1500\n")
                .expect("write config");

            let (app, _task) = App::new(Flags {
                duration_ms: Some(500),
                ..english()
            });
            assert_eq!(app.host.toast_state().duration_ms, 500);
        });
    }

    #[test]
    fn broken_config_is_reported_with_an_error_toast() {
        with_temp_config_dir(|dir| {
            std::fs::write(dir.join("settings.toml"), "this is = = not toml")
                .expect("write config");

            let (app, _task) = App::new(english());
            let state = app.host.toast_state();
            assert!(state.visible);
            assert!(!state.message.starts_with("MISSING"));
            assert_eq!(state.icon, toast::ToastIcon::Warning);
        });
    }

    #[test]
    fn tick_after_countdown_hides_toast() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(english());
            let start = Instant::now();
            app.host.apply(host::ToastTrigger::Success, "done", start);
            assert!(app.host.is_animating());

            let _ = app.update(Message::Tick(start + Duration::from_millis(3000)));
            assert!(!app.host.toast_state().visible);
        });
    }

    #[test]
    fn trigger_hides_current_toast_first() {
        with_temp_config_dir(|_| {
            let (mut app, _task) = App::new(english());
            app.host.apply(host::ToastTrigger::Info, "info", Instant::now());

            let _ = app.update(Message::Host(host::Message::Trigger(
                host::ToastTrigger::Error,
            )));
            assert!(!app.host.toast_state().visible);
            assert_eq!(app.host.latest_request(), 1);
        });
    }
}
