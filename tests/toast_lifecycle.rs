// SPDX-License-Identifier: MPL-2.0
//! Walks the host and toast through complete show/dismiss cycles on a
//! synthetic clock.

use iced_toast::app::config::Config;
use iced_toast::i18n::fluent::I18n;
use iced_toast::ui::design_tokens::{motion, palette};
use iced_toast::ui::host::{self, HostSettings, ToastTrigger};
use iced_toast::ui::toast::{self, Phase, ToastIcon};
use std::time::{Duration, Instant};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn english() -> I18n {
    I18n::new(Some("en-US".to_string()), &Config::default())
}

/// Presses `trigger` and delivers the delayed show at `start + 100ms`.
fn press(host: &mut host::State, i18n: &I18n, trigger: ToastTrigger, start: Instant) -> Instant {
    let _ = host.update(host::Message::Trigger(trigger), i18n, start);
    let request = host.latest_request();
    let shown_at = start + ms(100);
    let _ = host.update(host::Message::Show { request, trigger }, i18n, shown_at);
    shown_at
}

/// Feeds frame ticks from `from` to `to`, returning how many times the
/// toast went from visible to hidden.
fn run_frames(host: &mut host::State, i18n: &I18n, from: Instant, to: Instant) -> usize {
    let mut hides = 0;
    let mut now = from;
    while now <= to {
        let was_visible = host.toast_state().visible;
        let _ = host.update(host::Message::Toast(toast::Message::Tick(now)), i18n, now);
        if was_visible && !host.toast_state().visible {
            hides += 1;
        }
        now += ms(motion::FRAME_INTERVAL_MS);
    }
    hides
}

#[test]
fn success_toast_runs_full_cycle() {
    let i18n = english();
    let mut host = host::State::new(i18n.tr("toast-idle"), HostSettings::default());
    let start = Instant::now();

    let shown_at = press(&mut host, &i18n, ToastTrigger::Success, start);
    let state = host.toast_state();
    assert!(state.visible);
    assert_eq!(state.message, "Operation Completed!");
    assert_eq!(state.colors.progress, palette::SUCCESS_500);
    assert_eq!(state.icon, ToastIcon::CheckCircle);
    assert_eq!(host.toast().progress_at(shown_at), 1.0);

    let hides = run_frames(&mut host, &i18n, shown_at, shown_at + ms(4500));
    assert_eq!(hides, 1, "countdown must dismiss exactly once");
    assert!(!host.toast_state().visible);
    assert_eq!(host.toast().phase(), Phase::Hidden);
    assert!(!host.is_animating());
}

#[test]
fn second_trigger_replaces_first_without_merging() {
    let i18n = english();
    let mut host = host::State::new(i18n.tr("toast-idle"), HostSettings::default());
    let start = Instant::now();

    let _ = host.update(
        host::Message::Trigger(ToastTrigger::Success),
        &i18n,
        start,
    );
    let success_request = host.latest_request();
    let error_shown_at = press(&mut host, &i18n, ToastTrigger::Error, start + ms(20));

    // The success delay resolves late and must be ignored
    let _ = host.update(
        host::Message::Show {
            request: success_request,
            trigger: ToastTrigger::Success,
        },
        &i18n,
        error_shown_at + ms(5),
    );

    let state = host.toast_state();
    assert!(state.visible);
    assert_eq!(state.message, "An error occurred!");
    assert_eq!(state.colors.progress, palette::ERROR_500);
    assert_eq!(state.icon, ToastIcon::Warning);
    assert_eq!(state.generation, 1);
}

#[test]
fn close_mid_countdown_stops_further_dismissals() {
    let i18n = english();
    let mut host = host::State::new(i18n.tr("toast-idle"), HostSettings::default());
    let start = Instant::now();
    let shown_at = press(&mut host, &i18n, ToastTrigger::Info, start);

    let _ = run_frames(&mut host, &i18n, shown_at, shown_at + ms(1000));
    let _ = host.update(
        host::Message::Toast(toast::Message::Close),
        &i18n,
        shown_at + ms(1000),
    );
    assert!(!host.toast_state().visible);

    let hides = run_frames(&mut host, &i18n, shown_at + ms(1016), shown_at + ms(5000));
    assert_eq!(hides, 0);
    assert!(!host.toast().is_mounted());
}

#[test]
fn retrigger_while_visible_restarts_from_full() {
    let i18n = english();
    let settings = HostSettings {
        duration_ms: 2000,
        ..HostSettings::default()
    };
    let mut host = host::State::new(i18n.tr("toast-idle"), settings);
    let start = Instant::now();
    let first_shown = press(&mut host, &i18n, ToastTrigger::Info, start);
    let _ = run_frames(&mut host, &i18n, first_shown, first_shown + ms(1500));

    let second_shown = press(&mut host, &i18n, ToastTrigger::Info, first_shown + ms(1500));
    assert_eq!(host.toast().progress_at(second_shown), 1.0);
    assert!(host.toast_state().visible);

    // Nothing fires at the first toast's original deadline
    let hides = run_frames(&mut host, &i18n, second_shown, second_shown + ms(1900));
    assert_eq!(hides, 0);
    let hides = run_frames(&mut host, &i18n, second_shown + ms(1916), second_shown + ms(2100));
    assert_eq!(hides, 1);
}

#[test]
fn zero_duration_dismisses_on_first_frame() {
    let i18n = english();
    let settings = HostSettings {
        duration_ms: 0,
        ..HostSettings::default()
    };
    let mut host = host::State::new(i18n.tr("toast-idle"), settings);
    let shown_at = press(&mut host, &i18n, ToastTrigger::Error, Instant::now());

    let hides = run_frames(&mut host, &i18n, shown_at, shown_at);
    assert_eq!(hides, 1);
}
