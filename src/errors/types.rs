//! Error type definitions for the BesTV playlist gateway
//!
//! Fetch errors cover the single upstream request; resolve errors cover the
//! cache-then-fetch-then-parse pipeline. Cache I/O failures have no type
//! here: the cache is best-effort and swallows them.

use thiserror::Error;

/// Errors surfaced by the upstream fetcher
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection failures, timeouts, and non-success statuses from the
    /// HTTP client
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The upstream answered 200 with a zero-byte body
    #[error("empty response body from upstream")]
    EmptyBody,
}

/// Errors surfaced by channel directory resolution
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The cache was cold and the upstream request failed
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(#[from] FetchError),

    /// The raw document did not parse, or lacks the `dt` channel array
    #[error("malformed upstream document: {0}")]
    MalformedDocument(String),
}

impl ResolveError {
    /// Create a malformed document error with a custom message
    pub fn malformed<M: Into<String>>(message: M) -> Self {
        Self::MalformedDocument(message.into())
    }
}
