use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bestv_m3u::{
    cache::CacheStore, config::Config, services::SourceResolver, sources::bestv::BestvClient,
    web::WebServer,
};

#[derive(Parser)]
#[command(name = "bestv-m3u")]
#[command(version)]
#[command(about = "A lightweight M3U playlist gateway for BesTV live channels")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Listening IP address
    #[arg(short = 'H', long, value_name = "IP")]
    host: Option<String>,

    /// Listening port
    #[arg(short, long, value_name = "PORT")]
    port: Option<u16>,

    /// Log level
    #[arg(short = 'v', long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging with specified level
    let log_filter = if cli.log_level == "trace" {
        format!("bestv_m3u={},tower_http=trace", cli.log_level)
    } else {
        format!("bestv_m3u={}", cli.log_level)
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting BesTV M3U gateway v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from specified file
    std::env::set_var("CONFIG_FILE", &cli.config);
    let mut config = Config::load()?;
    info!("Configuration loaded from: {}", cli.config);

    // Override config with CLI arguments
    if let Some(host) = cli.host {
        config.web.host = host;
    }
    if let Some(port) = cli.port {
        config.web.port = port;
    }

    let cache = CacheStore::new(config.cache.file_path.clone(), config.cache.ttl());
    let fetcher = Arc::new(BestvClient::new(&config.upstream));
    let resolver = Arc::new(SourceResolver::new(cache, fetcher));
    info!(
        "Channel directory resolver initialized (cache: {}, ttl: {}s)",
        config.cache.file_path.display(),
        config.cache.ttl_seconds
    );

    let web_server = WebServer::new(config, resolver)?;
    info!("Starting web server on {}", web_server.addr());
    web_server.serve().await?;

    Ok(())
}
