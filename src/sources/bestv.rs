//! BesTV live channel source
//!
//! Issues the single POST request the BesTV CMS API expects: JSON content
//! type, empty object body, short timeout. TLS certificate verification is
//! disabled to stay compatible with the router-class deployments this
//! service targets, which commonly ship incomplete trust stores.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use super::ChannelFetch;
use crate::config::UpstreamConfig;
use crate::errors::FetchError;

pub struct BestvClient {
    client: Client,
    url: String,
}

impl BestvClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .danger_accept_invalid_certs(true)
            .user_agent(concat!("bestv-m3u/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            url: config.url.clone(),
        }
    }
}

#[async_trait]
impl ChannelFetch for BestvClient {
    async fn fetch(&self) -> Result<Bytes, FetchError> {
        debug!(url = %self.url, "fetching channel directory from upstream");

        let response = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .body("{}")
            .send()
            .await?
            .error_for_status()?;

        let payload = response.bytes().await?;
        if payload.is_empty() {
            return Err(FetchError::EmptyBody);
        }

        debug!(bytes = payload.len(), "upstream responded");
        Ok(payload)
    }
}
