// SPDX-License-Identifier: MPL-2.0
//! Time subscriptions for the application.

use super::Message;
use crate::ui::design_tokens::motion;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a frame tick subscription while the toast is animating.
///
/// Idle screens get no ticks at all, so a hidden toast costs nothing.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(motion::FRAME_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
