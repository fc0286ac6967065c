//! # Last.fm Integration Module
//!
//! Thin client for the one Last.fm Web API call this tool needs,
//! `user.gettoptracks`. Requests are unauthenticated apart from the static
//! API key and go through a [`Transport`], so the HTTP layer can be swapped
//! out in tests.
//!
//! ```text
//! cli::sync_top_track
//!          ↓
//! LastFmApi::fetch_top_track   (query building, typed decode)
//!          ↓
//! Transport::get               (reqwest blocking, 3 s timeout)
//!          ↓
//! https://ws.audioscrobbler.com/2.0
//! ```
//!
//! ## Errors
//!
//! Every failure on this side (network, timeout, non-200, unexpected body)
//! is reported as [`crate::error::SyncError::LookupFailure`]. There is no
//! retry, pagination or rate-limit handling.

use std::time::Duration;

pub mod tracks;
pub mod transport;

pub use tracks::{DEFAULT_LIMIT, parse_top_track};
pub use transport::{HttpResponse, ReqwestTransport, Transport};

pub const API_BASE_URI: &str = "https://ws.audioscrobbler.com/2.0";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(3);

pub struct LastFmApi<'a, T: Transport> {
    api_key: &'a str,
    base_uri: &'a str,
    transport: &'a T,
}

impl<'a, T: Transport> LastFmApi<'a, T> {
    pub fn new(api_key: &'a str, base_uri: &'a str, transport: &'a T) -> Self {
        Self {
            api_key,
            base_uri,
            transport,
        }
    }
}
