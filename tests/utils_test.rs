use lastfm_sync::types::{QueryParams, TopTrackResult, TopTrackTableRow};
use lastfm_sync::utils::*;

// Helper function to build query params from pairs
fn params(pairs: &[(&str, &str)]) -> QueryParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_merge_defaults_adds_missing_keys() {
    let mut query = params(&[("method", "user.gettoptracks")]);

    merge_defaults(&mut query, &[("api_key", "key"), ("format", "json")]);

    assert_eq!(
        query,
        params(&[
            ("method", "user.gettoptracks"),
            ("api_key", "key"),
            ("format", "json"),
        ])
    );
}

#[test]
fn test_merge_defaults_never_overrides() {
    let mut query = params(&[("format", "xml"), ("api_key", "mine")]);

    merge_defaults(&mut query, &[("api_key", "default"), ("format", "json")]);

    assert_eq!(query["format"], "xml");
    assert_eq!(query["api_key"], "mine");
    assert_eq!(query.len(), 2);
}

#[test]
fn test_merge_defaults_empty_defaults() {
    let mut query = params(&[("user", "alice")]);

    merge_defaults(&mut query, &[]);

    assert_eq!(query, params(&[("user", "alice")]));
}

#[test]
fn test_parse_playcount() {
    assert_eq!(parse_playcount("42"), Ok(42));
    assert_eq!(parse_playcount(" 7 "), Ok(7));
    assert_eq!(parse_playcount("0"), Ok(0));

    assert!(parse_playcount("").is_err());
    assert!(parse_playcount("-1").is_err());
    assert!(parse_playcount("4.5").is_err());
    assert!(parse_playcount("lots").is_err());
}

#[test]
fn test_table_row_from_result() {
    let result = TopTrackResult {
        track_name: "Song A".to_string(),
        artist_name: "Artist X".to_string(),
        playcount: 42,
    };

    let row = TopTrackTableRow::from(&result);

    assert_eq!(row.name, "Song A");
    assert_eq!(row.artist, "Artist X");
    assert_eq!(row.playcount, 42);
}
