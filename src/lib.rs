// SPDX-License-Identifier: MPL-2.0
//! `iced_toast` is an animated toast notification for the Iced GUI framework.
//!
//! The [`ui::toast`] component renders a card with an icon, a message, a
//! close button and a progress bar that drains over a configurable duration.
//! The [`ui::host`] screen demonstrates it with success, error and info
//! triggers, localized with Fluent and configured through `settings.toml`.

#![doc(html_root_url = "https://docs.rs/iced_toast/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod ui;
