//! Web layer
//!
//! Thin axum handlers over the service layer. The playlist handler owns the
//! degraded-output contract: resolution failures become a plain-text
//! playlist body, never a transport error.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::models::ChannelEntry;
use crate::services::SourceResolver;

pub mod handlers;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub resolver: Arc<SourceResolver>,
    pub catalog: &'static [ChannelEntry],
}

/// Web server configuration and setup
pub struct WebServer {
    app: Router,
    addr: SocketAddr,
}

impl WebServer {
    pub fn new(config: Config, resolver: Arc<SourceResolver>) -> Result<Self> {
        let addr: SocketAddr = format!("{}:{}", config.web.host, config.web.port).parse()?;
        let app = Self::create_router(AppState {
            config: Arc::new(config),
            resolver,
            catalog: crate::catalog::CHANNELS,
        });

        Ok(Self { app, addr })
    }

    /// Router with all routes and middleware. Public so integration tests
    /// can drive it without binding a socket.
    pub fn create_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::serve_playlist))
            .route("/playlist.m3u", get(handlers::serve_playlist))
            .route("/health", get(handlers::health_check))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(state)
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub async fn serve(self) -> Result<()> {
        let listener = tokio::net::TcpListener::bind(self.addr).await?;
        axum::serve(listener, self.app).await?;
        Ok(())
    }
}
