// SPDX-License-Identifier: MPL-2.0
//! Animated toast card with an auto-draining progress bar.
//!
//! The host owns the toast's content and visibility and passes them down as
//! [`Props`] every frame. This module keeps only what the host should not
//! care about: the countdown and the enter/exit transitions. When the
//! countdown runs out, or the close button is pressed, [`State::update`]
//! returns [`Event::Dismissed`] and the host decides what to do with it.
//!
//! # Lifecycle
//!
//! ```text
//!  Hidden ──visible──▶ Entering ──spring settles──▶ Shown
//!    ▲                    │                           │
//!    └─exit settles── Exiting ◀───────hidden──────────┘
//! ```
//!
//! Raising `visible`, or passing a new `generation` while visible, snaps
//! progress back to 1.0 and starts a fresh linear countdown.
//!
//! # Usage
//!
//! ```ignore
//! // in update()
//! self.toast.sync(&props, now);
//! if let toast::Event::Dismissed = self.toast.update(message) {
//!     self.visible = false;
//! }
//!
//! // in view()
//! toast::view(&self.toast, props, now).map(Message::Toast)
//! ```

mod props;
mod view;

pub use props::{Props, ToastAlignment, ToastColors, ToastIcon, ToastStyle};
pub use view::view;

use crate::ui::animation::{Easing, Spring, Tween};
use crate::ui::design_tokens::motion;
use std::time::Instant;

/// Mount state of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not rendered.
    #[default]
    Hidden,
    /// Scaling in on the bouncy spring.
    Entering,
    /// Fully on screen.
    Shown,
    /// Scaling down and fading out.
    Exiting,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Frame tick; samples the countdown and advances transitions.
    Tick(Instant),
    /// The close button was pressed.
    Close,
}

/// Events propagated to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Dismissed,
}

/// Countdown and transition state for a single toast.
#[derive(Debug, Clone, Default)]
pub struct State {
    phase: Phase,
    progress: Option<Tween>,
    scale: Option<Spring>,
    slide: Option<Tween>,
    /// Visibility seen on the last sync.
    was_visible: bool,
    seen_generation: Option<u64>,
    /// Whether this cycle already reported a dismissal.
    completed: bool,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles internal state with the props the host is about to render.
    ///
    /// Call after every host-side change to visibility or content.
    pub fn sync(&mut self, props: &Props<'_>, now: Instant) {
        let rising = props.visible && !self.was_visible;
        let regenerated = props.visible && self.seen_generation != Some(props.generation);

        if rising || regenerated {
            self.restart(props, now);
        } else if !props.visible && self.was_visible {
            self.exit(now);
        }

        self.was_visible = props.visible;
    }

    /// Handles a toast message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::Close => {
                if !self.was_visible || self.completed {
                    return Event::None;
                }
                self.completed = true;
                log::debug!("toast closed manually");
                Event::Dismissed
            }
        }
    }

    fn tick(&mut self, now: Instant) -> Event {
        match self.phase {
            Phase::Entering if self.scale.is_none_or(|s| s.is_settled(now)) => {
                self.phase = Phase::Shown;
            }
            Phase::Exiting if self.scale.is_none_or(|s| s.is_settled(now)) => {
                self.phase = Phase::Hidden;
                self.scale = None;
                self.slide = None;
            }
            _ => {}
        }

        let finished = self.progress.is_some_and(|p| p.is_finished(now));
        if self.was_visible && finished && !self.completed {
            self.completed = true;
            log::debug!("toast countdown finished");
            return Event::Dismissed;
        }
        Event::None
    }

    fn restart(&mut self, props: &Props<'_>, now: Instant) {
        self.progress = Some(Tween::new(1.0, 0.0, props.duration_ms, Easing::Linear, now));
        self.completed = false;
        self.seen_generation = Some(props.generation);

        if matches!(self.phase, Phase::Hidden | Phase::Exiting) {
            let from = self.scale_at(now);
            self.scale = Some(Spring::new(
                from,
                1.0,
                Spring::DAMPING_RATIO_MEDIUM_BOUNCY,
                Spring::STIFFNESS_MEDIUM,
                now,
            ));
            self.slide = Some(Tween::new(
                props.style.slide_from,
                0.0,
                motion::SLIDE_DURATION_MS,
                Easing::LinearOutSlowIn,
                now,
            ));
            self.phase = Phase::Entering;
        }
    }

    fn exit(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Hidden | Phase::Exiting) {
            return;
        }
        let from = self.scale_at(now);
        self.scale = Some(Spring::new(
            from,
            0.0,
            Spring::DAMPING_RATIO_NO_BOUNCY,
            Spring::STIFFNESS_MEDIUM_LOW,
            now,
        ));
        self.phase = Phase::Exiting;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Normalized countdown value in `[0, 1]`; 1.0 before the first show.
    #[must_use]
    pub fn progress_at(&self, now: Instant) -> f32 {
        self.progress.map_or(1.0, |p| p.value_at(now))
    }

    /// Card scale factor. May exceed 1.0 while the entry spring overshoots.
    #[must_use]
    pub fn scale_at(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Hidden => 0.0,
            _ => self.scale.map_or(1.0, |s| s.value_at(now)),
        }
    }

    /// Card opacity; only drops below 1.0 while exiting.
    #[must_use]
    pub fn alpha_at(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Hidden => 0.0,
            Phase::Exiting => self.scale_at(now).clamp(0.0, 1.0),
            Phase::Entering | Phase::Shown => 1.0,
        }
    }

    /// Vertical slide offset in layout units.
    #[must_use]
    pub fn slide_offset_at(&self, now: Instant) -> f32 {
        self.slide.map_or(0.0, |s| s.value_at(now))
    }

    /// Whether the close button accepts presses: only while on screen and
    /// not yet dismissed.
    #[must_use]
    pub fn is_closable(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Shown)
            && self.was_visible
            && !self.completed
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Whether frame ticks are needed: a transition or a live countdown is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Entering | Phase::Exiting)
            || (self.was_visible && self.progress.is_some() && !self.completed)
    }
}
