// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::host;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Host(host::Message),
    /// Frame tick while the toast is animating.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional countdown override in milliseconds. Takes precedence over
    /// `toast.duration_ms` in settings.toml.
    pub duration_ms: Option<i64>,
}
