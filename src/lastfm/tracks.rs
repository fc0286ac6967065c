use crate::{
    error::SyncError,
    types::{Period, QueryParams, ResponseFormat, TopTrackResult, TopTracksResponse},
    utils,
};

use super::{LastFmApi, transport::HttpResponse, transport::Transport};

/// Page size Last.fm uses when no limit is given.
pub const DEFAULT_LIMIT: u32 = 50;

impl<'a, T: Transport> LastFmApi<'a, T> {
    /// Issues one GET against the API root.
    ///
    /// `api_key` and `format` are only added when the caller has not set
    /// them in `params`.
    pub fn do_api_call(
        &self,
        mut params: QueryParams,
        format: ResponseFormat,
    ) -> Result<HttpResponse, SyncError> {
        utils::merge_defaults(
            &mut params,
            &[("api_key", self.api_key), ("format", format.as_str())],
        );

        self.transport.get(self.base_uri, &params, super::REQUEST_TIMEOUT)
    }

    /// Raw `user.gettoptracks` call.
    pub fn get_top_tracks(
        &self,
        username: &str,
        period: Period,
        limit: u32,
    ) -> Result<HttpResponse, SyncError> {
        let mut params = QueryParams::new();
        params.insert("method".to_string(), "user.gettoptracks".to_string());
        params.insert("user".to_string(), username.to_string());
        params.insert("period".to_string(), period.to_string());
        params.insert("limit".to_string(), limit.to_string());

        self.do_api_call(params, ResponseFormat::Json)
    }

    /// Returns the first entry of the user's top tracks for `period`.
    ///
    /// # Errors
    ///
    /// `LookupFailure` when the request fails, the status is not 200, or the
    /// body lacks `toptracks.track[0].{name, artist.name, playcount}`.
    pub fn fetch_top_track(
        &self,
        username: &str,
        period: Period,
        limit: u32,
    ) -> Result<TopTrackResult, SyncError> {
        let response = self.get_top_tracks(username, period, limit)?;
        if !response.is_ok() {
            return Err(SyncError::LookupFailure(format!(
                "Last.fm responded with status {}",
                response.status
            )));
        }

        parse_top_track(&response.body)
    }
}

pub fn parse_top_track(body: &str) -> Result<TopTrackResult, SyncError> {
    let res: TopTracksResponse = serde_json::from_str(body)
        .map_err(|e| SyncError::LookupFailure(format!("unexpected response: {}", e)))?;

    res.toptracks
        .track
        .into_iter()
        .next()
        .map(TopTrackResult::from)
        .ok_or_else(|| SyncError::LookupFailure("no tracks in response".to_string()))
}
