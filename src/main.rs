// SPDX-License-Identifier: MPL-2.0
use folio_gallery::app::{self, paths, Flags};
use folio_gallery::logging;

const HELP: &str = "\
folio_gallery - portfolio viewer

USAGE:
  folio_gallery [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --catalog <path>     Project catalog file replacing the built-in one
  --asset-base <dir>   Directory holding the catalog images (default: ./public)
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  FOLIO_CONFIG_DIR     Same as --config-dir
  RUST_LOG             Log filter (default: info)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    logging::init();

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        catalog: opt_value(&mut args, "--catalog"),
        asset_base: opt_value(&mut args, "--asset-base"),
        config_dir: opt_value(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(option = key, error = %err, "ignoring invalid option");
            None
        }
    }
}
