// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following the Elm-style
//! "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`host`] - Demo screen with the three trigger buttons
//!
//! # Components
//!
//! - [`toast`] - Animated toast card with an auto-draining progress bar
//!
//! # Shared Infrastructure
//!
//! - [`animation`] - Time-sampled tweens, easing curves and springs
//! - [`styles`] - Centralized styling (buttons)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing, motion)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`icons`] - SVG icon loading and rendering

pub mod animation;
pub mod design_tokens;
pub mod host;
pub mod icons;
pub mod styles;
pub mod theming;
pub mod toast;
