use std::fs;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use bytes::Bytes;
use tower::ServiceExt;

use bestv_m3u::cache::CacheStore;
use bestv_m3u::config::Config;
use bestv_m3u::errors::FetchError;
use bestv_m3u::services::SourceResolver;
use bestv_m3u::sources::ChannelFetch;
use bestv_m3u::web::{AppState, WebServer};

/// Fetcher with a canned outcome, so no test touches the network.
struct StaticFetcher(Option<&'static str>);

#[async_trait]
impl ChannelFetch for StaticFetcher {
    async fn fetch(&self) -> Result<Bytes, FetchError> {
        match self.0 {
            Some(payload) => Ok(Bytes::from_static(payload.as_bytes())),
            None => Err(FetchError::EmptyBody),
        }
    }
}

fn test_app(cache_dir: &tempfile::TempDir, fetcher: StaticFetcher) -> Router {
    let cache = CacheStore::new(
        cache_dir.path().join("channels.json"),
        Duration::from_secs(60),
    );
    let resolver = Arc::new(SourceResolver::new(cache, Arc::new(fetcher)));
    WebServer::create_router(AppState {
        config: Arc::new(Config::default()),
        resolver,
        catalog: bestv_m3u::catalog::CHANNELS,
    })
}

async fn get_response(app: &Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, headers, String::from_utf8(body_bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn test_playlist_served_with_headers_and_exact_body() {
    let dir = tempfile::tempdir().unwrap();
    // Numeric id on the wire, string id in the catalog.
    let app = test_app(
        &dir,
        StaticFetcher(Some(r#"{"dt":[{"id":2030,"channelUrl":"http://x/stream.m3u8"}]}"#)),
    );

    let (status, headers, body) = get_response(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "audio/x-mpegurl; charset=utf-8"
    );
    assert_eq!(
        headers.get(header::CACHE_CONTROL).unwrap(),
        "no-cache, must-revalidate"
    );
    assert_eq!(
        body,
        "#EXTM3U x-tvg-url=\"https://epg.iill.top/e.xml\"\n\
         #EXTINF:-1 tvg-id=\"东方卫视\" tvg-name=\"东方卫视\" tvg-logo=\"https://epg.iill.top/logo/东方卫视4K.png\" group-title=\"上海台\",东方卫视\n\
         http://x/stream.m3u8\n\n"
    );
}

#[tokio::test]
async fn test_playlist_alias_route_matches_root() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(
        &dir,
        StaticFetcher(Some(r#"{"dt":[{"id":"1605","channelUrl":"http://y/sports.m3u8"}]}"#)),
    );

    let (_, _, from_root) = get_response(&app, "/").await;
    let (status, _, from_alias) = get_response(&app, "/playlist.m3u").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(from_root, from_alias);
}

#[tokio::test]
async fn test_upstream_failure_degrades_to_error_playlist() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir, StaticFetcher(None));

    let (status, headers, body) = get_response(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert!(body.starts_with("#EXTM3U\n"));
    assert!(body.contains("# Error:"));
    // A failed fetch must not leave a cache record behind.
    assert!(!dir.path().join("channels.json").exists());
}

#[tokio::test]
async fn test_malformed_upstream_document_degrades() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir, StaticFetcher(Some(r#"{"code":500,"msg":"oops"}"#)));

    let (status, _, body) = get_response(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("#EXTM3U\n# Error:"));
}

#[tokio::test]
async fn test_fresh_cache_is_served_without_fetching() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("channels.json"),
        r#"{"dt":[{"id":"20","channelUrl":"http://cached/news.m3u8"}]}"#,
    )
    .unwrap();

    // The fetcher fails; only the cache can satisfy the request.
    let app = test_app(&dir, StaticFetcher(None));
    let (status, _, body) = get_response(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("http://cached/news.m3u8"));
    assert!(body.contains("上海新闻综合"));
}

#[tokio::test]
async fn test_health_endpoint() {
    let dir = tempfile::tempdir().unwrap();
    let app = test_app(&dir, StaticFetcher(None));

    let (status, _, body) = get_response(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "healthy");
}
