// SPDX-License-Identifier: MPL-2.0
use lens_sidebar::app::{self, paths, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    // Takes precedence over `LENS_SIDEBAR_CONFIG_DIR`.
    paths::init_cli_overrides(config_dir);

    let flags = Flags {
        lang,
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
