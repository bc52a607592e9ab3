// SPDX-License-Identifier: MPL-2.0
//! Demo screen owning the single toast and the three buttons that trigger it.
//!
//! Every trigger goes through the same sequence: hide the current toast,
//! wait `reset_delay` so the card leaves the screen, then apply the new
//! content and show it. Each trigger is tagged with a request id and only
//! the latest one is applied, so rapid presses never show a stale toast.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::toast::{self, ToastAlignment, ToastColors, ToastIcon, ToastStyle};
use iced::widget::{button, container, text, Column, Stack};
use iced::{Color, Element, Length, Padding, Task};
use std::time::{Duration, Instant};

const BUTTON_LABEL_SIZE: f32 = typography::TITLE_MD;

/// Presentation state of the toast, owned by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastState {
    pub message: String,
    pub visible: bool,
    pub duration_ms: i64,
    pub colors: ToastColors,
    pub icon: ToastIcon,
    /// Incremented on every show.
    pub generation: u64,
}

impl ToastState {
    /// Hidden toast with the stock idle look.
    #[must_use]
    pub fn idle(message: impl Into<String>, duration_ms: i64) -> Self {
        Self {
            message: message.into(),
            visible: false,
            duration_ms,
            colors: ToastColors::default(),
            icon: ToastIcon::Warning,
            generation: 0,
        }
    }
}

/// The three kinds of toast the screen can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastTrigger {
    Success,
    Error,
    Info,
}

impl ToastTrigger {
    pub const ALL: [ToastTrigger; 3] = [Self::Success, Self::Error, Self::Info];

    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Self::Success => "toast-success",
            Self::Error => "toast-error",
            Self::Info => "toast-info",
        }
    }

    #[must_use]
    pub fn button_key(self) -> &'static str {
        match self {
            Self::Success => "button-show-success",
            Self::Error => "button-show-error",
            Self::Info => "button-show-info",
        }
    }

    #[must_use]
    pub fn progress_color(self) -> Color {
        match self {
            Self::Success => palette::SUCCESS_500,
            Self::Error => palette::ERROR_500,
            Self::Info => palette::INFO_500,
        }
    }

    #[must_use]
    pub fn icon(self) -> ToastIcon {
        match self {
            Self::Success => ToastIcon::CheckCircle,
            Self::Error => ToastIcon::Warning,
            Self::Info => ToastIcon::Info,
        }
    }
}

/// Host behavior that comes from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostSettings {
    pub duration_ms: i64,
    pub reset_delay: Duration,
    pub alignment: ToastAlignment,
    pub style: ToastStyle,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            duration_ms: crate::ui::design_tokens::motion::TOAST_DURATION_MS,
            reset_delay: Duration::from_millis(100),
            alignment: ToastAlignment::default(),
            style: ToastStyle::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A trigger button was pressed.
    Trigger(ToastTrigger),
    /// The reset delay for `request` elapsed.
    Show {
        request: u64,
        trigger: ToastTrigger,
    },
    Toast(toast::Message),
}

#[derive(Debug, Clone)]
pub struct State {
    toast_state: ToastState,
    toast: toast::State,
    settings: HostSettings,
    latest_request: u64,
}

impl State {
    #[must_use]
    pub fn new(idle_message: impl Into<String>, settings: HostSettings) -> Self {
        Self {
            toast_state: ToastState::idle(idle_message, settings.duration_ms),
            toast: toast::State::new(),
            settings,
            latest_request: 0,
        }
    }

    #[must_use]
    pub fn toast_state(&self) -> &ToastState {
        &self.toast_state
    }

    #[must_use]
    pub fn toast(&self) -> &toast::State {
        &self.toast
    }

    #[must_use]
    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    pub fn show_success(&mut self, now: Instant) -> Task<Message> {
        self.request(ToastTrigger::Success, now)
    }

    pub fn show_error(&mut self, now: Instant) -> Task<Message> {
        self.request(ToastTrigger::Error, now)
    }

    pub fn show_info(&mut self, now: Instant) -> Task<Message> {
        self.request(ToastTrigger::Info, now)
    }

    /// Hides the current toast and schedules `trigger` after the reset delay.
    pub fn request(&mut self, trigger: ToastTrigger, now: Instant) -> Task<Message> {
        self.latest_request += 1;
        let request = self.latest_request;
        self.dismiss(now);

        let delay = self.settings.reset_delay;
        Task::perform(reset_delay(delay), move |()| Message::Show { request, trigger })
    }

    /// Sets the toast content for `trigger` and shows it.
    pub fn apply(&mut self, trigger: ToastTrigger, message: impl Into<String>, now: Instant) {
        self.toast_state = ToastState {
            message: message.into(),
            visible: true,
            duration_ms: self.settings.duration_ms,
            colors: ToastColors {
                border: palette::TRANSPARENT,
                background: palette::WHITE,
                progress: trigger.progress_color(),
                ..ToastColors::default()
            },
            icon: trigger.icon(),
            generation: self.toast_state.generation + 1,
        };
        self.sync(now);
    }

    pub fn dismiss(&mut self, now: Instant) {
        self.toast_state.visible = false;
        self.sync(now);
    }

    pub fn update(&mut self, message: Message, i18n: &I18n, now: Instant) -> Task<Message> {
        match message {
            Message::Trigger(trigger) => self.request(trigger, now),
            Message::Show { request, trigger } => {
                if request == self.latest_request {
                    self.apply(trigger, i18n.tr(trigger.message_key()), now);
                } else {
                    log::debug!(
                        "dropping stale toast request {request} (latest {})",
                        self.latest_request
                    );
                }
                Task::none()
            }
            Message::Toast(message) => {
                if let toast::Event::Dismissed = self.toast.update(message) {
                    self.dismiss(now);
                }
                Task::none()
            }
        }
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.toast.is_animating()
    }

    fn sync(&mut self, now: Instant) {
        let props = props(&self.toast_state, &self.settings);
        self.toast.sync(&props, now);
    }

    pub fn view<'a>(&'a self, i18n: &I18n, now: Instant) -> Element<'a, Message> {
        let buttons = ToastTrigger::ALL.into_iter().fold(
            Column::new().spacing(spacing::SM),
            |column, trigger| {
                let label = text(i18n.tr(trigger.button_key())).size(BUTTON_LABEL_SIZE);
                column.push(
                    button(container(label).center_x(Length::Fill))
                        .width(Length::Fill)
                        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
                        .padding(spacing::SM)
                        .style(styles::button::filled(trigger.progress_color()))
                        .on_press(Message::Trigger(trigger)),
                )
            },
        );

        let screen = container(buttons)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: spacing::XXL,
                right: spacing::MD,
                bottom: spacing::MD,
                left: spacing::MD,
            });

        let overlay = toast::view(&self.toast, props(&self.toast_state, &self.settings), now)
            .map(Message::Toast);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(screen)
            .push(overlay)
            .into()
    }
}

fn props<'a>(state: &'a ToastState, settings: &HostSettings) -> toast::Props<'a> {
    toast::Props::new(&state.message)
        .visible(state.visible)
        .generation(state.generation)
        .duration_ms(state.duration_ms)
        .colors(state.colors)
        .icon(state.icon)
        .alignment(settings.alignment)
        .style(settings.style)
}

async fn reset_delay(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn i18n() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn host() -> State {
        State::new("Success!", HostSettings::default())
    }

    #[test]
    fn starts_with_idle_hidden_toast() {
        let host = host();
        let state = host.toast_state();
        assert_eq!(state.message, "Success!");
        assert!(!state.visible);
        assert_eq!(state.duration_ms, 3000);
        assert_eq!(state.icon, ToastIcon::Warning);
        assert_eq!(state.colors.progress, palette::ERROR_500);
        assert!(!host.toast().is_mounted());
    }

    #[test]
    fn show_success_hides_then_applies_after_delay() {
        let i18n = i18n();
        let mut host = host();
        let start = Instant::now();

        let _task = host.show_success(start);
        assert!(!host.toast_state().visible);

        let request = host.latest_request();
        let _ = host.update(
            Message::Show {
                request,
                trigger: ToastTrigger::Success,
            },
            &i18n,
            start + ms(100),
        );

        let state = host.toast_state();
        assert!(state.visible);
        assert_eq!(state.message, "Operation Completed!");
        assert_eq!(state.colors.progress, palette::SUCCESS_500);
        assert_eq!(state.colors.border, palette::TRANSPARENT);
        assert_eq!(state.colors.background, palette::WHITE);
        assert_eq!(state.icon, ToastIcon::CheckCircle);
        assert_eq!(state.duration_ms, 3000);
        assert!(host.toast().is_mounted());
    }

    #[test]
    fn rapid_triggers_show_only_the_last() {
        let i18n = i18n();
        let mut host = host();
        let start = Instant::now();

        let _ = host.update(Message::Trigger(ToastTrigger::Success), &i18n, start);
        let first = host.latest_request();
        let _ = host.update(Message::Trigger(ToastTrigger::Error), &i18n, start + ms(10));
        let second = host.latest_request();
        assert_ne!(first, second);

        let _ = host.update(
            Message::Show {
                request: first,
                trigger: ToastTrigger::Success,
            },
            &i18n,
            start + ms(100),
        );
        assert!(!host.toast_state().visible);

        let _ = host.update(
            Message::Show {
                request: second,
                trigger: ToastTrigger::Error,
            },
            &i18n,
            start + ms(110),
        );
        let state = host.toast_state();
        assert!(state.visible);
        assert_eq!(state.message, "An error occurred!");
        assert_eq!(state.colors.progress, palette::ERROR_500);
        assert_eq!(state.icon, ToastIcon::Warning);
    }

    #[test]
    fn same_trigger_twice_differs_only_in_generation() {
        let mut host = host();
        let start = Instant::now();

        host.apply(ToastTrigger::Info, "Information Toast!", start);
        let first = host.toast_state().clone();
        host.apply(ToastTrigger::Info, "Information Toast!", start + ms(50));
        let second = host.toast_state().clone();

        assert_eq!(second.generation, first.generation + 1);
        assert_eq!(
            ToastState {
                generation: first.generation,
                ..second
            },
            first
        );
    }

    #[test]
    fn reapplying_while_visible_restarts_countdown() {
        let mut host = host();
        let start = Instant::now();
        host.apply(ToastTrigger::Info, "first", start);
        let later = start + ms(2000);
        assert!(host.toast().progress_at(later) < 0.4);

        host.apply(ToastTrigger::Info, "second", later);
        assert_eq!(host.toast().progress_at(later), 1.0);
    }

    #[test]
    fn countdown_completion_hides_toast() {
        let i18n = i18n();
        let mut host = host();
        let start = Instant::now();
        host.apply(ToastTrigger::Success, "done", start);

        let end = start + ms(3000);
        let _ = host.update(Message::Toast(toast::Message::Tick(end)), &i18n, end);
        assert!(!host.toast_state().visible);
        assert_eq!(host.toast().phase(), toast::Phase::Exiting);
    }

    #[test]
    fn close_hides_toast_immediately() {
        let i18n = i18n();
        let mut host = host();
        let start = Instant::now();
        host.apply(ToastTrigger::Error, "boom", start);

        let _ = host.update(Message::Toast(toast::Message::Close), &i18n, start + ms(200));
        assert!(!host.toast_state().visible);
    }

    #[test]
    fn dismiss_when_hidden_is_a_no_op() {
        let mut host = host();
        let before = host.toast_state().clone();
        host.dismiss(Instant::now());
        assert_eq!(host.toast_state(), &before);
        assert!(!host.is_animating());
    }

    #[test]
    fn triggers_map_to_distinct_looks() {
        for trigger in ToastTrigger::ALL {
            assert!(trigger.message_key().starts_with("toast-"));
            assert!(trigger.button_key().starts_with("button-show-"));
        }
        assert_eq!(ToastTrigger::Success.icon(), ToastIcon::CheckCircle);
        assert_eq!(ToastTrigger::Info.progress_color(), palette::INFO_500);
    }

    #[test]
    fn trigger_buttons_use_title_text() {
        assert_eq!(BUTTON_LABEL_SIZE, typography::TITLE_MD);

        let mut host = host();
        let now = Instant::now();
        host.apply(ToastTrigger::Success, "done", now);
        let _ = host.view(&i18n(), now);
    }

    #[tokio::test]
    async fn reset_delay_waits_before_resolving() {
        let start = std::time::Instant::now();
        reset_delay(ms(20)).await;
        assert!(start.elapsed() >= ms(20));
    }
}
