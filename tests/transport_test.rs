//! Tests for the reqwest-backed transport against a local mock server.
//!
//! The blocking client cannot run on the async test runtime, so every call
//! goes through `spawn_blocking`.

use std::time::{Duration, Instant};

use lastfm_sync::error::SyncError;
use lastfm_sync::lastfm::{LastFmApi, ReqwestTransport};
use lastfm_sync::types::{Period, TopTrackResult};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"{"toptracks":{"track":[{"name":"Song A","artist":{"name":"Artist X"},"playcount":"42"}]}}"#;

// Helper function to run one lookup with the real transport
async fn fetch(base_uri: String) -> Result<TopTrackResult, SyncError> {
    tokio::task::spawn_blocking(move || {
        let transport = ReqwestTransport::new()?;
        LastFmApi::new("secret-key", &base_uri, &transport).fetch_top_track(
            "alice",
            Period::OneMonth,
            1,
        )
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sends_all_query_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2.0"))
        .and(query_param("method", "user.gettoptracks"))
        .and(query_param("user", "alice"))
        .and(query_param("period", "1month"))
        .and(query_param("limit", "1"))
        .and(query_param("api_key", "secret-key"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(BODY))
        .expect(1)
        .mount(&server)
        .await;

    let result = fetch(format!("{}/2.0", server.uri())).await.unwrap();

    assert_eq!(result.track_name, "Song A");
    assert_eq!(result.artist_name, "Artist X");
    assert_eq!(result.playcount, 42);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_forbidden_is_lookup_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string(r#"{"error":10,"message":"Invalid API key"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let result = fetch(format!("{}/2.0", server.uri())).await;

    match result {
        Err(SyncError::LookupFailure(msg)) => assert!(msg.contains("403")),
        other => panic!("Expected LookupFailure, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(BODY)
                .set_delay(Duration::from_secs(4)),
        )
        .mount(&server)
        .await;

    let started = Instant::now();
    let result = fetch(format!("{}/2.0", server.uri())).await;
    let elapsed = started.elapsed();

    match result {
        Err(SyncError::LookupFailure(msg)) => assert!(msg.contains("timed out"), "{}", msg),
        other => panic!("Expected LookupFailure, got {:?}", other),
    }
    assert!(elapsed >= Duration::from_millis(2900), "{:?}", elapsed);
    assert!(elapsed < Duration::from_secs(4), "{:?}", elapsed);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_unreachable_server_is_lookup_failure() {
    let server = MockServer::start().await;
    let uri = format!("{}/2.0", server.uri());
    drop(server);

    let result = fetch(uri).await;

    assert!(matches!(result, Err(SyncError::LookupFailure(_))));
}
