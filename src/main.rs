use clap::{
    Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};

use lastfm_sync::{cli, config, error, lastfm::ReqwestTransport, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

/// Takes no arguments; everything is configured through the environment
/// (LAST_FM_API_KEY, LAST_FM_USER, optionally LAST_FM_API_URL and
/// SITE_CONFIG_PATH).
#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {}

fn main() {
    Cli::parse();

    if let Err(e) = config::load_env() {
        warning!("Cannot load .env file. Err: {}", e);
    }

    let settings = match config::Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => error!("{}", e),
    };

    let transport = match ReqwestTransport::new() {
        Ok(transport) => transport,
        Err(e) => error!("{}", e),
    };

    if let Err(e) = cli::sync_top_track(&settings, &transport) {
        error!("{}", e);
    }
}
