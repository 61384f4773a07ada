//! Channel directory resolution
//!
//! Cache-then-fetch: the on-disk record is consulted first and only its age
//! is checked, never its content. A stale or absent record triggers one
//! upstream fetch whose result is written back best-effort. Whatever bytes
//! win are then parsed and validated.

use std::sync::Arc;

use tracing::debug;

use crate::cache::CacheStore;
use crate::errors::{ResolveError, ResolveResult};
use crate::models::ChannelDirectory;
use crate::sources::ChannelFetch;

pub struct SourceResolver {
    cache: CacheStore,
    fetcher: Arc<dyn ChannelFetch>,
}

impl SourceResolver {
    pub fn new(cache: CacheStore, fetcher: Arc<dyn ChannelFetch>) -> Self {
        Self { cache, fetcher }
    }

    /// Produce the validated channel directory.
    ///
    /// Fails with [`ResolveError::UpstreamUnavailable`] when the cache is
    /// cold and the fetch fails, and [`ResolveError::MalformedDocument`]
    /// when the winning payload does not parse into a `dt` channel array.
    pub async fn resolve(&self) -> ResolveResult<ChannelDirectory> {
        let raw = match self.cache.get() {
            Some(payload) => {
                debug!(bytes = payload.len(), "serving channel directory from cache");
                payload
            }
            None => {
                let payload = self.fetcher.fetch().await?;
                self.cache.put(&payload);
                payload.to_vec()
            }
        };

        let directory: ChannelDirectory = serde_json::from_slice(&raw)
            .map_err(|e| ResolveError::malformed(e.to_string()))?;

        Ok(directory)
    }
}
