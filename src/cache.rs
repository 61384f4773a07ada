//! On-disk cache for the raw upstream response
//!
//! A single file holds the last successful response body; its mtime is the
//! stored-at timestamp. The cache is best-effort on both sides: read
//! failures are a miss, write failures are dropped after a log line.
//! Concurrent writers race with last-writer-wins, which is accepted.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use tracing::{debug, warn};

pub struct CacheStore {
    path: PathBuf,
    ttl: Duration,
}

impl CacheStore {
    pub fn new(path: PathBuf, ttl: Duration) -> Self {
        Self { path, ttl }
    }

    /// The cached payload, iff the record exists and is younger than the TTL.
    pub fn get(&self) -> Option<Vec<u8>> {
        let modified = fs::metadata(&self.path).and_then(|m| m.modified()).ok()?;
        // A clock that moved backwards reads as age zero, i.e. fresh.
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or_default();
        if age >= self.ttl {
            debug!(
                path = %self.path.display(),
                age_secs = age.as_secs(),
                "cache record expired"
            );
            return None;
        }

        match fs::read(&self.path) {
            Ok(payload) => Some(payload),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "cache read failed, treating as miss");
                None
            }
        }
    }

    /// Overwrite the record with `payload`, creating the parent directory if
    /// needed. Fire-and-forget: failures are logged and swallowed.
    pub fn put(&self, payload: &[u8]) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!(path = %parent.display(), error = %e, "failed to create cache directory");
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, payload) {
            warn!(path = %self.path.display(), error = %e, "failed to write cache record");
        }
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &std::path::Path {
        &self.path
    }
}
