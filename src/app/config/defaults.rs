// SPDX-License-Identifier: MPL-2.0
//! Default values and bounds for configuration entries.

use crate::ui::design_tokens::motion;

/// Default auto-dismiss countdown in milliseconds.
pub const DEFAULT_TOAST_DURATION_MS: i64 = motion::TOAST_DURATION_MS;

/// Pause between hiding the current toast and showing the next one.
pub const DEFAULT_RESET_DELAY_MS: u64 = 100;

/// Longest reset delay accepted from the config file.
pub const MAX_RESET_DELAY_MS: u64 = 2_000;
