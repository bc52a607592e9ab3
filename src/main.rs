// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, paths, Flags};

const HELP: &str = "\
iced_toast

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --lang <LOCALE>         UI language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml
  --duration-ms <MS>      Toast countdown length in milliseconds
  -h, --help              Print help
";

fn main() -> iced::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        duration_ms: opt_value(&mut args, "--duration-ms"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

/// Parses an optional flag value, logging and ignoring malformed input.
fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        log::warn!("invalid value for {key}: {err}");
        None
    })
}
