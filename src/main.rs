// SPDX-License-Identifier: MPL-2.0
use iced_loupe::app::{self, paths, Flags};

const HELP: &str = "\
IcedLoupe: preview an image at several widths with a magnifying lens

USAGE:
  iced_loupe [OPTIONS] [FILE]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory of settings.toml
  --data-dir <DIR>     Directory of the preference store
  --i18n-dir <DIR>     Directory of extra .ftl translation files
  -h, --help           Print this help

ENVIRONMENT:
  ICED_LOUPE_CONFIG_DIR, ICED_LOUPE_DATA_DIR, RUST_LOG
";

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let data_dir = args.opt_value_from_str("--data-dir")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Flags {
        lang,
        file_path,
        i18n_dir,
        data_dir,
        config_dir,
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting IcedLoupe");

    app::run(flags)
}
