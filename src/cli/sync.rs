use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Settings,
    error::SyncError,
    info,
    lastfm::{LastFmApi, Transport},
    management, success,
    types::{Period, TopTrackResult, TopTrackTableRow},
};

/// Resolves settings from `lookup` and runs the sync.
///
/// Credentials are checked before `transport` is touched.
pub fn run<F, T>(lookup: F, transport: &T) -> Result<TopTrackResult, SyncError>
where
    F: Fn(&str) -> Option<String>,
    T: Transport,
{
    let settings = Settings::from_lookup(lookup)?;
    sync_top_track(&settings, transport)
}

/// Fetches this month's top track and writes it into the site config.
///
/// The config file is only opened once the lookup has succeeded.
pub fn sync_top_track<T: Transport>(
    settings: &Settings,
    transport: &T,
) -> Result<TopTrackResult, SyncError> {
    let api = LastFmApi::new(&settings.api_key, &settings.api_url, transport);

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Fetching top track for {}...", settings.username));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let lookup = api.fetch_top_track(&settings.username, Period::OneMonth, 1);
    pb.finish_and_clear();
    let top_track = lookup?;

    info!("Writing top track to {}", settings.config_path.display());
    management::update_config(&settings.config_path, &top_track)?;

    println!("{}", Table::new([TopTrackTableRow::from(&top_track)]));
    success!(
        "Top track is {} by {} ({} plays)",
        top_track.track_name,
        top_track.artist_name,
        top_track.playcount
    );

    Ok(top_track)
}
