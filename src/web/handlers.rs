//! HTTP request handlers

use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::Json;
use serde_json::{json, Value};
use tracing::error;

use super::AppState;
use crate::errors::ResolveError;
use crate::playlist::{error_playlist, render_playlist};

/// Serve the joined playlist.
///
/// Success carries the playlist MIME type and a no-cache directive so
/// players re-request instead of holding stale stream URLs. Failures
/// degrade to the plain-text comment form, still starting `#EXTM3U`,
/// so playlist clients do not choke on the error body.
pub async fn serve_playlist(State(state): State<AppState>) -> (StatusCode, HeaderMap, String) {
    let mut headers = HeaderMap::new();

    match state.resolver.resolve().await {
        Ok(directory) => {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("audio/x-mpegurl; charset=utf-8"),
            );
            headers.insert(
                header::CACHE_CONTROL,
                HeaderValue::from_static("no-cache, must-revalidate"),
            );
            let body = render_playlist(&state.config.playlist.epg_url, state.catalog, &directory);
            (StatusCode::OK, headers, body)
        }
        Err(e) => {
            error!(error = %e, "channel directory resolution failed");
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            );
            let reason = match e {
                ResolveError::UpstreamUnavailable(_) => "unable to fetch BesTV channel data",
                ResolveError::MalformedDocument(_) => "unexpected BesTV data structure",
            };
            (StatusCode::OK, headers, error_playlist(reason))
        }
    }
}

/// Basic service health probe.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
