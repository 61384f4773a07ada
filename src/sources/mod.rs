//! Upstream source handlers
//!
//! A source produces the raw channel directory document. The trait exists
//! so resolution can be exercised against a stub without a network.

pub mod bestv;

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::FetchError;

/// A source of the raw channel directory document.
#[async_trait]
pub trait ChannelFetch: Send + Sync {
    /// Fetch the raw document bytes. One attempt, no retries.
    async fn fetch(&self) -> Result<Bytes, FetchError>;
}
