//! API integration tests
//!
//! Drives the router with `tower::ServiceExt::oneshot` and fake year lookups.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use marquee_core::{LanguageSeparator, ParserConfig, ReleaseParser};
use marquee_server::{create_router, AppContext, LookupError, MediaKind, YearLookup};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Records every call and answers with a fixed outcome.
struct FakeLookup {
    year: Option<u16>,
    fail: bool,
    delay: Option<Duration>,
    calls: Mutex<Vec<(String, MediaKind)>>,
}

impl FakeLookup {
    fn answering(year: u16) -> Arc<Self> {
        Arc::new(Self {
            year: Some(year),
            fail: false,
            delay: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            year: None,
            fail: true,
            delay: None,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn slow(year: u16) -> Arc<Self> {
        Arc::new(Self {
            year: Some(year),
            fail: false,
            delay: Some(Duration::from_secs(5)),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, MediaKind)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl YearLookup for FakeLookup {
    async fn lookup_year(&self, title: &str, kind: MediaKind) -> Result<Option<u16>, LookupError> {
        self.calls.lock().unwrap().push((title.to_string(), kind));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail {
            return Err(LookupError::Status {
                status: 503,
                body: "unavailable".into(),
            });
        }
        Ok(self.year)
    }
}

fn create_test_context() -> AppContext {
    let parser = ReleaseParser::new(ParserConfig::new().with_current_year(2026)).unwrap();
    AppContext::new(parser)
}

/// Helper to get response body as string
async fn body_to_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn post_json(ctx: AppContext, uri: &str, payload: Value) -> (StatusCode, Value) {
    let app = create_router(ctx);
    let response = app
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = body_to_string(response.into_body()).await;
    (status, serde_json::from_str(&body).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router(create_test_context());

    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_to_string(response.into_body()).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_parse_movie_url() {
    let (status, body) = post_json(
        create_test_context(),
        "/api/parse",
        json!({ "url": "https://cdn.example.com/files/Kung.Fu.Panda.4.2024.1080p.WEB-DL.Hindi-English.1.4GB.mkv" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "movieName": "Kung Fu Panda 4",
            "year": 2024,
            "languages": ["Hindi", "English"],
            "quality": "1080p",
            "size": "1.4GB",
            "season": null,
            "episode": null,
        })
    );
}

#[tokio::test]
async fn test_parse_invalid_url_is_bad_request() {
    let (status, body) = post_json(
        create_test_context(),
        "/api/parse",
        json!({ "url": "definitely not a url" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("invalid url"));
}

#[tokio::test]
async fn test_parse_undecodable_segment_is_bad_request() {
    let (status, _) = post_json(
        create_test_context(),
        "/api/parse",
        json!({ "url": "https://cdn.example.com/files/%FF%FE.mkv" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_parse_blocklist_only_file_is_unprocessable() {
    let (status, body) = post_json(
        create_test_context(),
        "/api/parse",
        json!({ "url": "https://cdn.example.com/files/@CineFlixHD.mkv" }),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("could not extract a valid title")
    );
}

#[tokio::test]
async fn test_failing_lookup_still_succeeds() {
    let lookup = FakeLookup::failing();
    let ctx = create_test_context().with_lookup(lookup.clone(), Duration::from_secs(1));

    let (status, body) = post_json(
        ctx,
        "/api/parse",
        json!({ "url": "https://cdn.example.com/tv/The.Office.S02E05.720p.HDTV.x264-GROUP.mkv" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movieName"], "The Office");
    assert_eq!(body["year"], Value::Null);
    assert_eq!(body["season"], 2);
    assert_eq!(body["episode"], 5);
    assert_eq!(lookup.calls(), vec![("The Office".to_string(), MediaKind::Tv)]);
}

#[tokio::test]
async fn test_lookup_fills_missing_year() {
    let lookup = FakeLookup::answering(2005);
    let ctx = create_test_context().with_lookup(lookup.clone(), Duration::from_secs(1));

    let (status, body) = post_json(
        ctx,
        "/api/parse",
        json!({ "url": "https://cdn.example.com/tv/The.Office.S02E05.720p.HDTV.x264-GROUP.mkv" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2005);
}

#[tokio::test]
async fn test_lookup_searches_movies_without_episode_fields() {
    let lookup = FakeLookup::answering(2008);
    let ctx = create_test_context().with_lookup(lookup.clone(), Duration::from_secs(1));

    let (status, body) = post_json(
        ctx,
        "/api/parse",
        json!({ "url": "https://cdn.example.com/m/Kung.Fu.Panda.1080p.Hindi.mkv" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["movieName"], "Kung Fu Panda");
    assert_eq!(body["year"], 2008);
    assert_eq!(lookup.calls(), vec![("Kung Fu Panda".to_string(), MediaKind::Movie)]);
}

#[tokio::test]
async fn test_lookup_skipped_when_filename_has_year() {
    let lookup = FakeLookup::answering(1999);
    let ctx = create_test_context().with_lookup(lookup.clone(), Duration::from_secs(1));

    let (status, body) = post_json(
        ctx,
        "/api/parse",
        json!({ "url": "https://cdn.example.com/files/Kung.Fu.Panda.4.2024.1080p.mkv" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], 2024);
    assert!(lookup.calls().is_empty());
}

#[tokio::test]
async fn test_lookup_year_outside_window_is_dropped() {
    for year in [1850, 1900, 2031, 2099] {
        let lookup = FakeLookup::answering(year);
        let ctx = create_test_context().with_lookup(lookup.clone(), Duration::from_secs(1));

        let (status, body) = post_json(
            ctx,
            "/api/parse",
            json!({ "url": "https://cdn.example.com/tv/The.Office.S02E05.720p.mkv" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["year"], Value::Null, "year {year} should be rejected");
        assert_eq!(lookup.calls().len(), 1);
    }
}

#[tokio::test]
async fn test_slow_lookup_times_out() {
    let lookup = FakeLookup::slow(2005);
    let ctx = create_test_context().with_lookup(lookup.clone(), Duration::from_millis(50));

    let (status, body) = post_json(
        ctx,
        "/api/parse",
        json!({ "url": "https://cdn.example.com/tv/The.Office.S02E05.720p.mkv" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["year"], Value::Null);
    assert_eq!(lookup.calls().len(), 1);
}

#[tokio::test]
async fn test_label_endpoint() {
    let (status, body) = post_json(
        create_test_context(),
        "/api/label",
        json!({
            "url": "https://cdn.example.com/dl/Show.S01E03.1080p.mkv",
            "label": "Hindi 900MB",
            "season": 1,
            "episode": 3,
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "label": "S01E03 1080p Hindi [900MB]" }));
}

#[tokio::test]
async fn test_label_separator_from_request_and_context() {
    let payload = json!({
        "url": "https://cdn.example.com/dl/Movie.Dual.Audio.Hindi.English.720p.mkv",
    });

    let (_, body) = post_json(create_test_context(), "/api/label", payload.clone()).await;
    assert_eq!(body["label"], "720p Dual Audio+Hindi+English");

    let ctx = create_test_context().with_separator(LanguageSeparator::Comma);
    let (_, body) = post_json(ctx, "/api/label", payload).await;
    assert_eq!(body["label"], "720p Dual Audio, Hindi, English");

    let (_, body) = post_json(
        create_test_context(),
        "/api/label",
        json!({
            "url": "https://cdn.example.com/dl/Movie.Hindi.English.mkv",
            "separator": "comma",
        }),
    )
    .await;
    assert_eq!(body["label"], "Hindi, English");
}

#[tokio::test]
async fn test_label_without_fields_falls_back() {
    let (status, body) = post_json(
        create_test_context(),
        "/api/label",
        json!({ "url": "https://cdn.example.com/dl/file" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "Download");
}

#[tokio::test]
async fn test_label_empty_url_is_bad_request() {
    let (status, body) = post_json(create_test_context(), "/api/label", json!({ "url": "  " })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "url must not be empty");
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = create_router(create_test_context());

    let response = app
        .oneshot(
            Request::post("/api/parse")
                .header("content-type", "application/json")
                .body(Body::from("{\"url\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = create_router(create_test_context());

    let response = app
        .oneshot(Request::get("/api/unknown").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
