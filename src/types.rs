use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

/// Query string of a Last.fm API call, keyed by parameter name.
pub type QueryParams = BTreeMap<String, String>;

/// Trailing time window accepted by `user.gettoptracks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Overall,
    SevenDay,
    OneMonth,
    ThreeMonth,
    SixMonth,
    TwelveMonth,
}

impl Period {
    /// Value of the `period` query parameter, e.g. `1month`.
    ///
    /// # Example
    ///
    /// ```
    /// assert_eq!(Period::OneMonth.as_str(), "1month");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Overall => "overall",
            Period::SevenDay => "7day",
            Period::OneMonth => "1month",
            Period::ThreeMonth => "3month",
            Period::SixMonth => "6month",
            Period::TwelveMonth => "12month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    #[default]
    Json,
    Xml,
}

impl ResponseFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::Json => "json",
            ResponseFormat::Xml => "xml",
        }
    }
}

/// The single most-played track of a period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopTrackResult {
    pub track_name: String,
    pub artist_name: String,
    pub playcount: u64,
}

#[derive(Tabled)]
pub struct TopTrackTableRow {
    pub name: String,
    pub artist: String,
    pub playcount: u64,
}

impl From<&TopTrackResult> for TopTrackTableRow {
    fn from(result: &TopTrackResult) -> Self {
        TopTrackTableRow {
            name: result.track_name.clone(),
            artist: result.artist_name.clone(),
            playcount: result.playcount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub toptracks: TopTracks,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracks {
    pub track: Vec<TopTrackEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTrackEntry {
    pub name: String,
    pub artist: TrackArtist,
    // Last.fm sends counts as strings, e.g. "42"
    #[serde(deserialize_with = "utils::deserialize_playcount")]
    pub playcount: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: String,
}

impl From<TopTrackEntry> for TopTrackResult {
    fn from(entry: TopTrackEntry) -> Self {
        TopTrackResult {
            track_name: entry.name,
            artist_name: entry.artist.name,
            playcount: entry.playcount,
        }
    }
}
