// SPDX-License-Identifier: MPL-2.0
use pinch::app::{self, paths, Flags};
use std::process::ExitCode;

const HELP: &str = "\
Pinch - pinch, zoom and pan a small set of images

USAGE:
    pinch [OPTIONS]

OPTIONS:
    --config-dir <DIR>   Directory holding settings.toml
    --assets-dir <DIR>   Directory holding the page images
    --page <ID>          Id of the page shown first
    -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        assets_dir: args.opt_value_from_str("--assets-dir")?,
        page: args.opt_value_from_str("--page")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("Ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    log::info!("Starting Pinch");
    paths::init_cli_overrides(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
