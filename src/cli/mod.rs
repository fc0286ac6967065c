//! # CLI Module
//!
//! The command layer of lastfm-sync. There is a single command: fetch the
//! user's top track of the month from Last.fm and write it into the site's
//! `_config.yml`.
//!
//! ```text
//! Settings (credentials, endpoints, config path)
//!     ↓
//! lastfm::LastFmApi::fetch_top_track
//!     ↓
//! management::update_config
//! ```
//!
//! Each step either completes or returns a [`crate::error::SyncError`];
//! nothing is retried and the config file is never touched when the lookup
//! fails. Console feedback goes through the `info!`/`success!` macros and an
//! `indicatif` spinner while the request is in flight.

mod sync;

pub use sync::run;
pub use sync::sync_top_track;
